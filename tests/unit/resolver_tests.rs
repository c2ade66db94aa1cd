// Resolution tests through the public entry points
//
// These exercise the full chain: store -> sanitizer -> validator -> both
// providers -> selection policy, the way an application would call it.

use twincdn::{
    build_src_set, resolve_media, resolve_optimized_media, CdnConfig, ConfigStore, MediaError,
    ProviderKind, TransformOptions,
};

fn demo_store() -> ConfigStore {
    ConfigStore::with_config(CdnConfig::new(
        "demo",
        "https://project.supabase.co",
        "media",
    ))
    .expect("demo config is valid")
}

fn backup_store() -> ConfigStore {
    ConfigStore::with_config(
        CdnConfig::new("demo", "https://project.supabase.co", "media").with_force_backup(true),
    )
    .expect("demo config is valid")
}

#[test]
fn test_documented_primary_url() {
    // Test: the canonical example resolves to the documented primary URL,
    // with directives in fixed order regardless of how options were set
    let options = TransformOptions::new()
        .with_fit("cover")
        .with_format("webp")
        .with_quality(85u8)
        .with_width(800u32);

    let media = resolve_media(&demo_store(), "images/a.jpg", &options).unwrap();

    assert_eq!(
        media.primary_url,
        "https://ik.imagekit.io/demo/tr:w-800,q-85,c-maintain_ratio,f-webp/images/a.jpg"
    );
    assert_eq!(media.active_provider, ProviderKind::Primary);
}

#[test]
fn test_backup_url_always_available() {
    let media = resolve_media(&demo_store(), "images/a.jpg", &TransformOptions::default()).unwrap();
    assert!(media
        .backup_url
        .starts_with("https://project.supabase.co/storage/v1/render/image/public/media/images/a.jpg"));
    assert_ne!(media.primary_url, media.backup_url);
}

#[test]
fn test_force_backup_mode() {
    let options = TransformOptions::new().with_width(800u32).with_focal("face");
    let media = resolve_media(&backup_store(), "images/a.jpg", &options).unwrap();

    assert_eq!(media.active_provider, ProviderKind::Backup);
    assert_eq!(media.primary_url, media.backup_url);
    assert_eq!(
        media.primary_url,
        "https://project.supabase.co/storage/v1/render/image/public/media/images/a.jpg\
         ?width=800&quality=80&resize=cover"
    );
}

#[test]
fn test_path_is_normalized_for_both_providers() {
    let media = resolve_media(
        &demo_store(),
        "\\images\\\\2024//a.jpg",
        &TransformOptions::new().with_width(100u32),
    )
    .unwrap();

    assert!(media.primary_url.ends_with("/images/2024/a.jpg"));
    assert!(media.backup_url.contains("/media/images/2024/a.jpg?"));
}

#[test]
fn test_unconfigured_store_does_no_work() {
    // Test: every entry point fails with NotConfigured before initialization,
    // even when the path and options are also invalid
    let store = ConfigStore::new();
    let bad_options = TransformOptions::new().with_width(0u32);

    assert_eq!(
        resolve_media(&store, "../x", &bad_options),
        Err(MediaError::NotConfigured)
    );
    assert_eq!(
        resolve_optimized_media(&store, "x.jpg", &TransformOptions::default()),
        Err(MediaError::NotConfigured)
    );
    assert_eq!(
        build_src_set(&store, "x.jpg", &TransformOptions::default(), None),
        Err(MediaError::NotConfigured)
    );
}

#[test]
fn test_invalid_path_surfaces() {
    let err = resolve_media(&demo_store(), "%2e%2e/secret.jpg", &TransformOptions::default())
        .unwrap_err();
    match err {
        MediaError::InvalidPath { path, .. } => assert_eq!(path, "%2e%2e/secret.jpg"),
        other => panic!("Expected InvalidPath, got {:?}", other),
    }
}

#[test]
fn test_invalid_options_surface_all_fields() {
    let options = TransformOptions::new()
        .with_width(4001u32)
        .with_format("tiff")
        .with_fit("squash");
    let err = resolve_media(&demo_store(), "a.jpg", &options).unwrap_err();

    match err {
        MediaError::InvalidOptions { violations } => {
            let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
            assert_eq!(fields, vec!["width", "format", "fit"]);
        }
        other => panic!("Expected InvalidOptions, got {:?}", other),
    }
}

#[test]
fn test_optimized_media_has_src_set() {
    let media =
        resolve_optimized_media(&demo_store(), "x.jpg", &TransformOptions::default()).unwrap();
    let src_set = media.src_set.expect("src_set populated");
    assert!(src_set.starts_with("https://ik.imagekit.io/demo/tr:w-320,"));
    assert!(src_set.ends_with(" 1920w"));
}

#[test]
fn test_results_are_fresh_values() {
    let store = demo_store();
    let options = TransformOptions::new().with_width(300u32);
    let first = resolve_media(&store, "a.jpg", &options).unwrap();
    let second = resolve_media(&store, "a.jpg", &options).unwrap();
    assert_eq!(first, second);
}
