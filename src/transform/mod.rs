//! Transform options
//!
//! Parsing and validation of the caller-facing option set that both
//! providers encode, each in its own syntax.

pub mod params;
pub mod validate;

pub use params::{FitMode, Focal, ImageTransform, OutputFormat, TransformOptions};
pub use validate::validate_options;
