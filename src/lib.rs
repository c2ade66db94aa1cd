// Twincdn - image transformation URLs for a primary image proxy with a
// storage-render backup

pub mod binding;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod provider;
pub mod resolver;
pub mod sanitize;
pub mod srcset;
pub mod transform;

pub use binding::{optimized_media_view, MediaView};
pub use config::{CdnConfig, ConfigStore};
pub use error::{FieldViolation, MediaError};
pub use provider::ProviderKind;
pub use resolver::{resolve_media, resolve_optimized_media, MediaResolver, OptimizedMedia};
pub use sanitize::{sanitize_path, SanitizedPath};
pub use srcset::build_src_set;
pub use transform::{validate_options, ImageTransform, TransformOptions};
