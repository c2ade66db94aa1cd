// Configuration loading tests
//
// Environment variables are process-wide. Tests that touch the TWINCDN_*
// variables hold ENV_LOCK; the others use names no other test reads.

use std::io::Write;
use std::sync::Mutex;

use twincdn::config::{CdnConfig, ENV_BACKUP_ORIGIN, ENV_BUCKET, ENV_FORCE_BACKUP, ENV_PROVIDER_ID};
use twincdn::MediaError;

static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_can_deserialize_minimal_yaml_config() {
    let yaml = r#"
provider_id: "demo"
backup_origin: "https://project.supabase.co"
bucket: "media"
"#;
    let config = CdnConfig::from_yaml_with_env(yaml).expect("Failed to load YAML");
    assert_eq!(config.provider_id, "demo");
    assert_eq!(config.backup_origin, "https://project.supabase.co");
    assert_eq!(config.bucket, "media");
    assert!(!config.force_backup);
    assert!(!config.debug_logging);
    assert_eq!(config.primary_host, "ik.imagekit.io");
    assert!(config.validate().is_ok());
}

#[test]
fn test_can_deserialize_full_yaml_config() {
    let yaml = r#"
provider_id: "demo"
backup_origin: "http://localhost:54321"
bucket: "media"
force_backup: true
debug_logging: true
primary_host: "images.example.com"
"#;
    let config = CdnConfig::from_yaml_with_env(yaml).unwrap();
    assert!(config.force_backup);
    assert!(config.debug_logging);
    assert_eq!(config.primary_host, "images.example.com");
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_keys_rejected() {
    let yaml = r#"
provider_id: "demo"
backup_origin: "https://project.supabase.co"
bucket: "media"
signing_key: "nope"
"#;
    let result = CdnConfig::from_yaml_with_env(yaml);
    assert!(matches!(result, Err(MediaError::InvalidConfiguration(_))));
}

#[test]
fn test_missing_required_key_rejected() {
    let yaml = r#"
provider_id: "demo"
bucket: "media"
"#;
    let err = CdnConfig::from_yaml_with_env(yaml).unwrap_err();
    assert!(err.to_string().contains("backup_origin"));
}

#[test]
fn test_env_var_substitution() {
    std::env::set_var("TWINCDN_TEST_SUBST_ID", "from-env");
    let yaml = r#"
provider_id: "${TWINCDN_TEST_SUBST_ID}"
backup_origin: "https://project.supabase.co"
bucket: "media"
"#;
    let config = CdnConfig::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config.provider_id, "from-env");
}

#[test]
fn test_env_var_substitution_missing_variable() {
    let yaml = r#"
provider_id: "${TWINCDN_TEST_DEFINITELY_UNSET}"
backup_origin: "https://project.supabase.co"
bucket: "media"
"#;
    let err = CdnConfig::from_yaml_with_env(yaml).unwrap_err();
    assert!(err
        .to_string()
        .contains("Environment variable 'TWINCDN_TEST_DEFINITELY_UNSET' is referenced but not set"));
}

#[test]
fn test_env_references_in_comments_ignored() {
    let yaml = r#"
# provider_id may be written as "${TWINCDN_TEST_COMMENTED_OUT}"
provider_id: "demo"
backup_origin: "https://project.supabase.co"
  # bucket: "${TWINCDN_TEST_ALSO_COMMENTED_OUT}"
bucket: "media"
"#;
    let config = CdnConfig::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config.provider_id, "demo");
    assert_eq!(config.bucket, "media");
}

#[test]
fn test_shipped_sample_config_loads() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var(ENV_PROVIDER_ID, "demo");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/twincdn.yaml");
    let config = CdnConfig::from_file(path).expect("Failed to load twincdn.yaml");

    assert_eq!(config.provider_id, "demo");
    assert_eq!(config.bucket, "media");
    assert!(!config.force_backup);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "provider_id: demo\nbackup_origin: https://project.supabase.co\nbucket: media"
    )
    .unwrap();

    let config = CdnConfig::from_file(file.path()).unwrap();
    assert_eq!(config.bucket, "media");
}

#[test]
fn test_from_missing_file() {
    let err = CdnConfig::from_file("/nonexistent/twincdn.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::remove_var(ENV_PROVIDER_ID);
    assert!(CdnConfig::from_env().is_err());

    std::env::set_var(ENV_PROVIDER_ID, "demo");
    std::env::set_var(ENV_BACKUP_ORIGIN, "https://project.supabase.co");
    std::env::set_var(ENV_BUCKET, "media");
    std::env::set_var(ENV_FORCE_BACKUP, "true");

    let config = CdnConfig::from_env().unwrap();
    assert_eq!(config.provider_id, "demo");
    assert!(config.force_backup);
    assert!(config.validate().is_ok());

    std::env::set_var(ENV_FORCE_BACKUP, "sometimes");
    assert!(CdnConfig::from_env().is_err());

    std::env::remove_var(ENV_FORCE_BACKUP);
}
