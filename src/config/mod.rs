// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::constants::DEFAULT_PRIMARY_HOST;
use crate::error::MediaError;
use crate::logging::mask_identifier;

pub mod store;

pub use store::ConfigStore;

/// Environment variables read by [`CdnConfig::from_env`]
pub const ENV_PROVIDER_ID: &str = "TWINCDN_PROVIDER_ID";
pub const ENV_BACKUP_ORIGIN: &str = "TWINCDN_BACKUP_ORIGIN";
pub const ENV_BUCKET: &str = "TWINCDN_BUCKET";
pub const ENV_FORCE_BACKUP: &str = "TWINCDN_FORCE_BACKUP";
pub const ENV_DEBUG: &str = "TWINCDN_DEBUG";
pub const ENV_PRIMARY_HOST: &str = "TWINCDN_PRIMARY_HOST";

/// Hosts allowed to serve the backup origin over plain http
const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0", "[::1]", "::1"];

static ENV_VAR_PATTERN: OnceLock<Regex> = OnceLock::new();
static BUCKET_PATTERN: OnceLock<Regex> = OnceLock::new();
static HOST_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Gets a compiled regex for one of the constant patterns above.
///
/// The patterns are compile-time constants covered by the tests below, so
/// the `expect` can only fire on a developer error.
fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("Invalid constant regex"))
}

fn default_primary_host() -> String {
    DEFAULT_PRIMARY_HOST.to_string()
}

/// Provider settings shared by every resolution
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CdnConfig {
    /// Account identifier on the primary image proxy
    pub provider_id: String,
    /// Origin of the backup storage API (e.g. `https://project.supabase.co`)
    pub backup_origin: String,
    /// Public bucket holding the originals on the backup provider
    pub bucket: String,
    /// Route every resolution to the backup provider
    #[serde(default)]
    pub force_backup: bool,
    /// Emit masked debug events for each resolution
    #[serde(default)]
    pub debug_logging: bool,
    /// Host of the primary image proxy
    #[serde(default = "default_primary_host")]
    pub primary_host: String,
}

// Identifiers stay masked even in debug output
impl fmt::Debug for CdnConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CdnConfig")
            .field("provider_id", &mask_identifier(&self.provider_id))
            .field("backup_origin", &self.backup_origin)
            .field("bucket", &mask_identifier(&self.bucket))
            .field("force_backup", &self.force_backup)
            .field("debug_logging", &self.debug_logging)
            .field("primary_host", &self.primary_host)
            .finish()
    }
}

impl CdnConfig {
    pub fn new(
        provider_id: impl Into<String>,
        backup_origin: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            backup_origin: backup_origin.into(),
            bucket: bucket.into(),
            force_backup: false,
            debug_logging: false,
            primary_host: default_primary_host(),
        }
    }

    pub fn with_force_backup(mut self, force_backup: bool) -> Self {
        self.force_backup = force_backup;
        self
    }

    pub fn with_debug_logging(mut self, debug_logging: bool) -> Self {
        self.debug_logging = debug_logging;
        self
    }

    pub fn with_primary_host(mut self, host: impl Into<String>) -> Self {
        self.primary_host = host.into();
        self
    }

    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, MediaError> {
        // Replace ${VAR_NAME} with environment variable values; comment
        // lines are passed through untouched
        let re = pattern(&ENV_VAR_PATTERN, r"\$\{([A-Z_][A-Z0-9_]*)\}");

        let mut substituted = String::with_capacity(yaml.len());
        for line in yaml.lines() {
            if line.trim_start().starts_with('#') {
                substituted.push_str(line);
            } else {
                // First, check that all referenced environment variables exist
                for caps in re.captures_iter(line) {
                    let var_name = &caps[1];
                    std::env::var(var_name).map_err(|_| {
                        MediaError::invalid_config(format!(
                            "Environment variable '{}' is referenced but not set",
                            var_name
                        ))
                    })?;
                }

                let replaced = re.replace_all(line, |caps: &regex::Captures| {
                    std::env::var(&caps[1]).unwrap_or_default()
                });
                substituted.push_str(&replaced);
            }
            substituted.push('\n');
        }

        serde_yaml::from_str(&substituted).map_err(|e| MediaError::invalid_config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MediaError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            MediaError::invalid_config(format!("Failed to read config file: {}", e))
        })?;
        Self::from_yaml_with_env(&yaml)
    }

    /// Build a configuration from `TWINCDN_*` environment variables
    pub fn from_env() -> Result<Self, MediaError> {
        let required = |name: &str| {
            std::env::var(name)
                .map_err(|_| MediaError::invalid_config(format!("{} is not set", name)))
        };

        let mut config = Self::new(
            required(ENV_PROVIDER_ID)?,
            required(ENV_BACKUP_ORIGIN)?,
            required(ENV_BUCKET)?,
        );

        if let Ok(value) = std::env::var(ENV_FORCE_BACKUP) {
            config.force_backup = parse_flag(ENV_FORCE_BACKUP, &value)?;
        }
        if let Ok(value) = std::env::var(ENV_DEBUG) {
            config.debug_logging = parse_flag(ENV_DEBUG, &value)?;
        }
        if let Ok(host) = std::env::var(ENV_PRIMARY_HOST) {
            config.primary_host = host;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MediaError> {
        if self.provider_id.trim().is_empty() {
            return Err(MediaError::invalid_config("provider_id cannot be empty"));
        }

        if self.bucket.is_empty() {
            return Err(MediaError::invalid_config("bucket cannot be empty"));
        }

        if self.bucket == "." || self.bucket == ".." {
            return Err(MediaError::invalid_config(format!(
                "bucket '{}' is not a valid bucket name",
                self.bucket
            )));
        }

        if !pattern(&BUCKET_PATTERN, r"^[A-Za-z0-9._-]+$").is_match(&self.bucket) {
            return Err(MediaError::invalid_config(format!(
                "bucket '{}' may only contain letters, digits, '.', '_' and '-'",
                self.bucket
            )));
        }

        if !pattern(&HOST_PATTERN, r"^[A-Za-z0-9]([A-Za-z0-9.-]*[A-Za-z0-9])?$")
            .is_match(&self.primary_host)
        {
            return Err(MediaError::invalid_config(format!(
                "primary_host '{}' must be a bare host name",
                self.primary_host
            )));
        }

        validate_origin(&self.backup_origin)
    }
}

/// The backup origin must be an absolute https URL; plain http is only
/// accepted for local development hosts.
fn validate_origin(origin: &str) -> Result<(), MediaError> {
    let uri: http::Uri = origin.parse().map_err(|e| {
        MediaError::invalid_config(format!(
            "backup_origin '{}' is not a valid URL: {}",
            origin, e
        ))
    })?;

    let (Some(scheme), Some(host)) = (uri.scheme_str(), uri.host()) else {
        return Err(MediaError::invalid_config(format!(
            "backup_origin '{}' must be an absolute URL",
            origin
        )));
    };

    if uri.query().is_some() {
        return Err(MediaError::invalid_config(format!(
            "backup_origin '{}' must not contain a query string",
            origin
        )));
    }

    match scheme {
        "https" => Ok(()),
        "http" if is_local_host(host) => Ok(()),
        _ => Err(MediaError::invalid_config(format!(
            "backup_origin '{}' must use https (http is only allowed for local development)",
            origin
        ))),
    }
}

fn is_local_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    LOCAL_HOSTS.contains(&host.as_str()) || host.ends_with(".localhost")
}

fn parse_flag(name: &str, value: &str) -> Result<bool, MediaError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(MediaError::invalid_config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
