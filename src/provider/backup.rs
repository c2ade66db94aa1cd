//! Backup provider: storage render API with query-string transforms
//!
//! ```text
//! https://project.supabase.co/storage/v1/render/image/public/<bucket>/images/a.jpg?width=800&quality=85
//! ```

use crate::config::CdnConfig;
use crate::constants::BACKUP_RENDER_PATH;
use crate::sanitize::SanitizedPath;
use crate::transform::ImageTransform;

use super::{CdnUrlBuilder, ProviderKind};

#[derive(Debug, Clone, Copy)]
pub struct BackupCdn<'a> {
    origin: &'a str,
    bucket: &'a str,
}

impl<'a> BackupCdn<'a> {
    pub fn new(origin: &'a str, bucket: &'a str) -> Self {
        Self {
            origin: origin.trim_end_matches('/'),
            bucket,
        }
    }

    pub fn from_config(config: &'a CdnConfig) -> Self {
        Self::new(&config.backup_origin, &config.bucket)
    }
}

impl CdnUrlBuilder for BackupCdn<'_> {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Backup
    }

    fn build_url(&self, path: &SanitizedPath, transform: &ImageTransform) -> String {
        let path = path.as_str().trim_start_matches('/');
        let base = format!(
            "{}/{}/{}/{}",
            self.origin, BACKUP_RENDER_PATH, self.bucket, path
        );

        let query = render_query(transform);
        if query.is_empty() {
            base
        } else {
            format!("{}?{}", base, query)
        }
    }
}

/// Build the render query string (without the leading `?`)
///
/// `resize` carries the fit mode name unchanged; the render API accepts
/// the same vocabulary.
pub fn render_query(transform: &ImageTransform) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    if let Some(width) = transform.width {
        params.push(("width", width.to_string()));
    }
    if let Some(height) = transform.height {
        params.push(("height", height.to_string()));
    }
    if let Some(quality) = transform.quality {
        params.push(("quality", quality.to_string()));
    }
    if let Some(format) = transform.format.filter(|f| !f.is_auto()) {
        params.push(("format", format.to_string()));
    }
    if let Some(fit) = transform.fit {
        params.push(("resize", fit.to_string()));
    }

    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}
