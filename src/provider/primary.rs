//! Primary provider: image proxy with path-embedded transforms
//!
//! ```text
//! https://ik.imagekit.io/<provider_id>/tr:w-800,q-85,c-maintain_ratio,f-webp/images/a.jpg
//! ```

use crate::config::CdnConfig;
use crate::constants::TRANSFORM_SEGMENT_PREFIX;
use crate::sanitize::SanitizedPath;
use crate::transform::{FitMode, Focal, ImageTransform};

use super::{CdnUrlBuilder, ProviderKind};

#[derive(Debug, Clone, Copy)]
pub struct PrimaryCdn<'a> {
    host: &'a str,
    provider_id: &'a str,
}

impl<'a> PrimaryCdn<'a> {
    pub fn new(host: &'a str, provider_id: &'a str) -> Self {
        Self { host, provider_id }
    }

    pub fn from_config(config: &'a CdnConfig) -> Self {
        Self::new(&config.primary_host, &config.provider_id)
    }
}

impl CdnUrlBuilder for PrimaryCdn<'_> {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Primary
    }

    fn build_url(&self, path: &SanitizedPath, transform: &ImageTransform) -> String {
        let segment = transform_segment(transform);
        let path = path.as_str().trim_start_matches('/');

        if segment.is_empty() {
            format!("https://{}/{}/{}", self.host, self.provider_id, path)
        } else {
            format!(
                "https://{}/{}/{}/{}",
                self.host, self.provider_id, segment, path
            )
        }
    }
}

/// Crop strategy code for a fit mode
pub fn fit_directive(fit: FitMode) -> &'static str {
    match fit {
        FitMode::Cover => "c-maintain_ratio",
        FitMode::Contain => "c-at_max",
        FitMode::Fill => "c-force",
    }
}

pub fn focal_directive(focal: Focal) -> &'static str {
    match focal {
        Focal::Auto => "fo-auto",
        Focal::Face => "fo-face",
        Focal::Center => "fo-center",
        Focal::Top => "fo-top",
        Focal::Bottom => "fo-bottom",
        Focal::Left => "fo-left",
        Focal::Right => "fo-right",
    }
}

/// Build the `tr:` segment for a transform
///
/// Directive order is fixed: width, height, quality, fit, focal, format,
/// dpr, blur, sharpen. Returns an empty string when nothing is encoded.
pub fn transform_segment(transform: &ImageTransform) -> String {
    let mut directives = Vec::new();

    if let Some(width) = transform.width {
        directives.push(format!("w-{}", width));
    }
    if let Some(height) = transform.height {
        directives.push(format!("h-{}", height));
    }
    if let Some(quality) = transform.quality {
        directives.push(format!("q-{}", quality));
    }
    if let Some(fit) = transform.fit {
        directives.push(fit_directive(fit).to_string());
    }
    if let Some(focal) = transform.focal {
        directives.push(focal_directive(focal).to_string());
    }
    // auto is the proxy's own default and is left implicit
    if let Some(format) = transform.format.filter(|f| !f.is_auto()) {
        directives.push(format!("f-{}", format));
    }
    if let Some(dpr) = transform.dpr.filter(|d| *d > 1.0) {
        directives.push(format!("dpr-{}", dpr));
    }
    if let Some(blur) = transform.blur {
        directives.push(format!("bl-{}", blur));
    }
    if transform.sharpen {
        directives.push("e-sharpen".to_string());
    }

    if directives.is_empty() {
        String::new()
    } else {
        format!("{}{}", TRANSFORM_SEGMENT_PREFIX, directives.join(","))
    }
}
