// Responsive srcset tests through the public entry point

use twincdn::{build_src_set, CdnConfig, ConfigStore, TransformOptions};

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
fn test_src_set_two_widths() {
    let src_set = build_src_set(
        &demo_store(),
        "x.jpg",
        &TransformOptions::default(),
        Some(&[320, 640][..]),
    )
    .unwrap();

    let entries: Vec<&str> = src_set.split(", ").collect();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].ends_with(" 320w"));
    assert!(entries[0].contains("tr:w-320,"));
    assert!(entries[1].ends_with(" 640w"));
    assert!(entries[1].contains("tr:w-640,"));
}

#[test]
fn test_src_set_uses_backup_when_forced() {
    let src_set = build_src_set(
        &backup_store(),
        "x.jpg",
        &TransformOptions::default(),
        Some(&[320][..]),
    )
    .unwrap();

    assert_eq!(
        src_set,
        "https://project.supabase.co/storage/v1/render/image/public/media/x.jpg\
         ?width=320&quality=80&resize=cover 320w"
    );
}

#[test]
fn test_src_set_rejects_invalid_input_before_building() {
    let err = build_src_set(
        &demo_store(),
        "../x.jpg",
        &TransformOptions::default(),
        Some(&[320][..]),
    )
    .unwrap_err();
    assert_eq!(err.kind(), "invalid_path");
}
