//! Transform option types
//!
//! [`TransformOptions`] is what callers hand in: every field optional and
//! loosely typed, so that a fractional width or an unknown format can be
//! reported instead of failing to construct. [`ImageTransform`] is the
//! validated, strongly typed result the provider adapters consume.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DPR, DEFAULT_QUALITY};
use crate::error::FieldViolation;

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Let the CDN negotiate from the Accept header
    #[default]
    Auto,
    WebP,
    Avif,
    Jpg,
    Png,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::WebP => "webp",
            Self::Avif => "avif",
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl FromStr for OutputFormat {
    type Err = FieldViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputFormat::Auto),
            "webp" => Ok(OutputFormat::WebP),
            "avif" => Ok(OutputFormat::Avif),
            "jpg" => Ok(OutputFormat::Jpg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(FieldViolation::new(
                "format",
                format!("unknown format: {}", s),
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the image fills the requested box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Fill the box, keeping aspect ratio and cropping the overflow (default)
    #[default]
    Cover,
    /// Fit inside the box, keeping aspect ratio
    Contain,
    /// Stretch to the exact box
    Fill,
}

impl FitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::Fill => "fill",
        }
    }
}

impl FromStr for FitMode {
    type Err = FieldViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(FitMode::Cover),
            "contain" => Ok(FitMode::Contain),
            "fill" => Ok(FitMode::Fill),
            _ => Err(FieldViolation::new(
                "fit",
                format!("unknown fit mode: {}", s),
            )),
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Focal point kept in frame when cropping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focal {
    Auto,
    /// Face detection
    Face,
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

impl Focal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Face => "face",
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for Focal {
    type Err = FieldViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Focal::Auto),
            "face" => Ok(Focal::Face),
            "center" => Ok(Focal::Center),
            "top" => Ok(Focal::Top),
            "bottom" => Ok(Focal::Bottom),
            "left" => Ok(Focal::Left),
            "right" => Ok(Focal::Right),
            _ => Err(FieldViolation::new(
                "focal",
                format!("unknown focal point: {}", s),
            )),
        }
    }
}

impl fmt::Display for Focal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller supplied transform options, prior to validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformOptions {
    /// Target width in pixels (integer, 1-4000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Target height in pixels (integer, 1-4000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Output quality (integer, 1-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    /// auto, webp, avif, jpg or png
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// cover, contain or fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<String>,
    /// auto, face, center, top, bottom, left or right
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal: Option<String>,
    /// Device pixel ratio (1-3, fractions allowed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpr: Option<f64>,
    /// Blur radius (integer, 1-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpen: Option<bool>,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: impl Into<f64>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<f64>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_quality(mut self, quality: impl Into<f64>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_fit(mut self, fit: impl Into<String>) -> Self {
        self.fit = Some(fit.into());
        self
    }

    pub fn with_focal(mut self, focal: impl Into<String>) -> Self {
        self.focal = Some(focal.into());
        self
    }

    pub fn with_dpr(mut self, dpr: impl Into<f64>) -> Self {
        self.dpr = Some(dpr.into());
        self
    }

    pub fn with_blur(mut self, blur: impl Into<f64>) -> Self {
        self.blur = Some(blur.into());
        self
    }

    pub fn with_sharpen(mut self, sharpen: bool) -> Self {
        self.sharpen = Some(sharpen);
        self
    }
}

/// Validated transform, ready for the provider adapters
///
/// Fields left as `None` are simply not encoded into URLs. The validator
/// fills `quality`, `fit`, `format` and `dpr` with their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageTransform {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: Option<u8>,
    pub format: Option<OutputFormat>,
    pub fit: Option<FitMode>,
    pub focal: Option<Focal>,
    pub dpr: Option<f64>,
    pub blur: Option<u8>,
    pub sharpen: bool,
}

impl ImageTransform {
    /// Fill unset quality, fit, format and dpr with their defaults
    pub fn with_defaults(mut self) -> Self {
        self.quality.get_or_insert(DEFAULT_QUALITY);
        self.fit.get_or_insert(FitMode::default());
        self.format.get_or_insert(OutputFormat::default());
        self.dpr.get_or_insert(DEFAULT_DPR);
        self
    }

    /// Check if any directive would be encoded
    pub fn has_transformations(&self) -> bool {
        self.width.is_some()
            || self.height.is_some()
            || self.quality.is_some()
            || self.format.is_some_and(|f| !f.is_auto())
            || self.fit.is_some()
            || self.focal.is_some()
            || self.dpr.is_some_and(|d| d > 1.0)
            || self.blur.is_some()
            || self.sharpen
    }
}
