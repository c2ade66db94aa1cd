//! Media URL resolution
//!
//! Sanitizes the path, validates the options, builds both provider URLs and
//! applies the force-backup policy. Both URLs are always computed so the
//! caller can fail over client-side without a second call.

use serde::Serialize;
use tracing::debug;

use crate::config::{CdnConfig, ConfigStore};
use crate::constants::DEFAULT_SRCSET_WIDTHS;
use crate::error::MediaError;
use crate::logging::mask_identifier;
use crate::provider::{BackupCdn, CdnUrlBuilder, PrimaryCdn, ProviderKind};
use crate::sanitize::sanitize_path;
use crate::srcset::build_descriptors;
use crate::transform::{validate_options, TransformOptions};

/// Resolved URLs for one media path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedMedia {
    /// URL to render first (the backup URL when force-backup is on)
    pub primary_url: String,
    /// Backup provider URL for client-side failover
    pub backup_url: String,
    pub active_provider: ProviderKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_set: Option<String>,
}

/// Resolves media paths against one configuration
#[derive(Debug, Clone, Copy)]
pub struct MediaResolver<'a> {
    config: &'a CdnConfig,
}

impl<'a> MediaResolver<'a> {
    pub fn new(config: &'a CdnConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a CdnConfig {
        self.config
    }

    /// Resolve a path into primary and backup URLs
    ///
    /// # Errors
    ///
    /// - [`MediaError::InvalidPath`] if the path fails sanitization
    /// - [`MediaError::InvalidOptions`] if any option is out of range or unknown
    pub fn resolve(
        &self,
        path: &str,
        options: &TransformOptions,
    ) -> Result<OptimizedMedia, MediaError> {
        let path = sanitize_path(path)?;
        let transform = validate_options(options)?;

        let primary_url = PrimaryCdn::from_config(self.config).build_url(&path, &transform);
        let backup_url = BackupCdn::from_config(self.config).build_url(&path, &transform);

        let media = if self.config.force_backup {
            OptimizedMedia {
                primary_url: backup_url.clone(),
                backup_url,
                active_provider: ProviderKind::Backup,
                src_set: None,
            }
        } else {
            OptimizedMedia {
                primary_url,
                backup_url,
                active_provider: ProviderKind::Primary,
                src_set: None,
            }
        };

        if self.config.debug_logging {
            debug!(
                provider_id = %mask_identifier(&self.config.provider_id),
                active_provider = %media.active_provider,
                path_length = path.as_str().chars().count(),
                "Resolved media URLs"
            );
        }

        Ok(media)
    }

    /// Responsive descriptor string for the given widths
    pub fn build_src_set(
        &self,
        path: &str,
        options: &TransformOptions,
        widths: &[u32],
    ) -> Result<String, MediaError> {
        build_descriptors(self, path, options, widths)
    }

    /// [`MediaResolver::resolve`] plus a srcset over the default breakpoints
    pub fn resolve_optimized(
        &self,
        path: &str,
        options: &TransformOptions,
    ) -> Result<OptimizedMedia, MediaError> {
        let mut media = self.resolve(path, options)?;
        media.src_set = Some(self.build_src_set(path, options, &DEFAULT_SRCSET_WIDTHS)?);
        Ok(media)
    }
}

/// Resolve a path with the store's configuration
///
/// # Errors
///
/// [`MediaError::NotConfigured`] before the store is initialized, otherwise
/// the errors of [`MediaResolver::resolve`].
pub fn resolve_media(
    store: &ConfigStore,
    path: &str,
    options: &TransformOptions,
) -> Result<OptimizedMedia, MediaError> {
    store.resolver()?.resolve(path, options)
}

/// Resolve a path and populate its srcset over the default breakpoints
pub fn resolve_optimized_media(
    store: &ConfigStore,
    path: &str,
    options: &TransformOptions,
) -> Result<OptimizedMedia, MediaError> {
    store.resolver()?.resolve_optimized(path, options)
}
