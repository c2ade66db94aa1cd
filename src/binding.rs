//! Rendering boundary
//!
//! UI code should never fail to render because an image URL could not be
//! built. [`optimized_media_view`] is the one place resolution errors are
//! turned into a value: empty URLs plus the error that caused them.

use serde::{Serialize, Serializer};
use tracing::warn;

use crate::config::ConfigStore;
use crate::error::MediaError;
use crate::provider::ProviderKind;
use crate::resolver::{resolve_optimized_media, OptimizedMedia};
use crate::transform::TransformOptions;

/// Render-ready media URLs, or empty strings and the error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaView {
    pub primary_url: String,
    pub backup_url: String,
    pub src_set: String,
    pub active_provider: Option<ProviderKind>,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<MediaError>,
}

impl MediaView {
    pub fn failed(error: MediaError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<OptimizedMedia> for MediaView {
    fn from(media: OptimizedMedia) -> Self {
        Self {
            primary_url: media.primary_url,
            backup_url: media.backup_url,
            src_set: media.src_set.unwrap_or_default(),
            active_provider: Some(media.active_provider),
            error: None,
        }
    }
}

/// Resolve media for rendering, degrading to an empty view on failure
pub fn optimized_media_view(
    store: &ConfigStore,
    path: &str,
    options: &TransformOptions,
) -> MediaView {
    match resolve_optimized_media(store, path, options) {
        Ok(media) => media.into(),
        Err(err) => {
            warn!(error = %err, kind = err.kind(), "Media resolution failed, rendering empty view");
            MediaView::failed(err)
        }
    }
}

fn serialize_error<S>(error: &Option<MediaError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}
