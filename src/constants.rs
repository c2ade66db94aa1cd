// Constants module - centralized limits and defaults
//
// Validation ranges and URL building blocks shared by the sanitizer,
// the option validator and both provider adapters.

// =============================================================================
// Path limits
// =============================================================================

/// Maximum accepted length of a media path, in characters
pub const MAX_PATH_LENGTH: usize = 500;

// =============================================================================
// Transform ranges
// =============================================================================

/// Largest width or height a transform may request
pub const MAX_DIMENSION: u32 = 4000;

/// Smallest width or height a transform may request
pub const MIN_DIMENSION: u32 = 1;

/// Inclusive quality range
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Inclusive blur range
pub const MIN_BLUR: u8 = 1;
pub const MAX_BLUR: u8 = 100;

/// Inclusive device pixel ratio range
pub const MIN_DPR: f64 = 1.0;
pub const MAX_DPR: f64 = 3.0;

// =============================================================================
// Transform defaults
// =============================================================================

/// Quality applied when the caller does not set one
pub const DEFAULT_QUALITY: u8 = 80;

/// Device pixel ratio applied when the caller does not set one
pub const DEFAULT_DPR: f64 = 1.0;

/// Breakpoints used for responsive descriptors when none are given
pub const DEFAULT_SRCSET_WIDTHS: [u32; 7] = [320, 640, 768, 1024, 1280, 1536, 1920];

// =============================================================================
// Provider defaults
// =============================================================================

/// Host of the primary image proxy
pub const DEFAULT_PRIMARY_HOST: &str = "ik.imagekit.io";

/// Prefix of every primary transform segment
pub const TRANSFORM_SEGMENT_PREFIX: &str = "tr:";

/// Public render endpoint of the backup storage API, relative to its origin
pub const BACKUP_RENDER_PATH: &str = "storage/v1/render/image/public";
