// Logging tests
//
// The global subscriber can only be installed once per process, so both
// the first and the repeated initialization are checked in one test.

use twincdn::logging::{init_subscriber, mask_identifier};
use twincdn::{resolve_media, CdnConfig, ConfigStore, TransformOptions};

#[test]
fn test_can_initialize_tracing_subscriber_once() {
    assert!(init_subscriber().is_ok());
    assert!(init_subscriber().is_err());

    // Debug events are emitted without disturbing the result
    let store = ConfigStore::with_config(
        CdnConfig::new("demo-account", "https://project.supabase.co", "media")
            .with_debug_logging(true),
    )
    .unwrap();
    let media = resolve_media(&store, "a.jpg", &TransformOptions::default()).unwrap();
    assert!(media.primary_url.contains("/demo-account/"));
}

#[test]
fn test_mask_identifier_never_reveals_full_value() {
    let masked = mask_identifier("production-account-42");
    assert_eq!(masked, "pro***");
    assert!(!masked.contains("account"));
}
