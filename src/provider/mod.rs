//! CDN provider adapters
//!
//! Two providers encode the same [`ImageTransform`] in different syntaxes:
//! - [`PrimaryCdn`]: image proxy, transforms as a `tr:` path segment
//! - [`BackupCdn`]: storage render API, transforms as query parameters
//!
//! Both are pure string builders behind [`CdnUrlBuilder`]. [`Provider`] is the
//! closed set of variants; adding a provider means adding a variant.

use std::fmt;

use serde::Serialize;

use crate::config::CdnConfig;
use crate::sanitize::SanitizedPath;
use crate::transform::ImageTransform;

pub mod backup;
pub mod primary;

pub use backup::BackupCdn;
pub use primary::PrimaryCdn;

/// Which provider produced a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Primary,
    Backup,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Backup => "backup",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a transformation URL for an already sanitized path
pub trait CdnUrlBuilder {
    fn kind(&self) -> ProviderKind;

    fn build_url(&self, path: &SanitizedPath, transform: &ImageTransform) -> String;
}

#[derive(Debug, Clone, Copy)]
pub enum Provider<'a> {
    Primary(PrimaryCdn<'a>),
    Backup(BackupCdn<'a>),
}

impl<'a> Provider<'a> {
    pub fn for_kind(kind: ProviderKind, config: &'a CdnConfig) -> Self {
        match kind {
            ProviderKind::Primary => Provider::Primary(PrimaryCdn::from_config(config)),
            ProviderKind::Backup => Provider::Backup(BackupCdn::from_config(config)),
        }
    }
}

impl CdnUrlBuilder for Provider<'_> {
    fn kind(&self) -> ProviderKind {
        match self {
            Provider::Primary(cdn) => cdn.kind(),
            Provider::Backup(cdn) => cdn.kind(),
        }
    }

    fn build_url(&self, path: &SanitizedPath, transform: &ImageTransform) -> String {
        match self {
            Provider::Primary(cdn) => cdn.build_url(path, transform),
            Provider::Backup(cdn) => cdn.build_url(path, transform),
        }
    }
}
