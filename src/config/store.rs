//! Set-once configuration holder
//!
//! A [`ConfigStore`] is an ordinary value owned by the caller, not a process
//! global: tests and multi-tenant hosts create as many as they need. It
//! accepts exactly one validated [`CdnConfig`] and hands out copies or
//! resolvers afterwards. Re-configuration and partial merges are rejected.

use std::sync::OnceLock;

use tracing::info;

use crate::error::MediaError;
use crate::logging::mask_identifier;
use crate::resolver::MediaResolver;

use super::CdnConfig;

#[derive(Debug, Default)]
pub struct ConfigStore {
    config: OnceLock<CdnConfig>,
}

impl ConfigStore {
    /// Create an empty, uninitialized store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that is already initialized with `config`
    pub fn with_config(config: CdnConfig) -> Result<Self, MediaError> {
        let store = Self::new();
        store.initialize(config)?;
        Ok(store)
    }

    /// Validate and install the configuration
    ///
    /// # Errors
    ///
    /// - [`MediaError::InvalidConfiguration`] if `config` fails validation
    /// - [`MediaError::InvalidConfiguration`] if the store was already initialized;
    ///   the first configuration stays in place
    pub fn initialize(&self, config: CdnConfig) -> Result<(), MediaError> {
        config.validate()?;

        let provider_id = mask_identifier(&config.provider_id);
        let bucket = mask_identifier(&config.bucket);
        let force_backup = config.force_backup;

        self.config.set(config).map_err(|_| {
            MediaError::invalid_config(
                "configuration is already initialized and cannot be changed",
            )
        })?;

        info!(
            provider_id = %provider_id,
            bucket = %bucket,
            force_backup,
            "Media configuration initialized"
        );

        Ok(())
    }

    /// Copy of the installed configuration, if any
    pub fn get(&self) -> Option<CdnConfig> {
        self.config.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.config.get().is_some()
    }

    /// Resolver bound to the installed configuration
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::NotConfigured`] before [`ConfigStore::initialize`].
    pub fn resolver(&self) -> Result<MediaResolver<'_>, MediaError> {
        self.config
            .get()
            .map(MediaResolver::new)
            .ok_or(MediaError::NotConfigured)
    }
}
