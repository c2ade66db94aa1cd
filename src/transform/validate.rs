//! Transform option validation
//!
//! Every present field is checked on its own; all failures are collected
//! before returning so callers see the full list at once.

use std::str::FromStr;

use crate::constants::{
    MAX_BLUR, MAX_DIMENSION, MAX_DPR, MAX_QUALITY, MIN_BLUR, MIN_DIMENSION, MIN_DPR, MIN_QUALITY,
};
use crate::error::{FieldViolation, MediaError};

use super::params::{FitMode, Focal, ImageTransform, OutputFormat, TransformOptions};

/// Validate caller options and apply defaults
///
/// # Errors
///
/// Returns [`MediaError::InvalidOptions`] listing every field that is
/// non-finite, fractional where an integer is required, out of range, or an
/// unknown enum name.
pub fn validate_options(options: &TransformOptions) -> Result<ImageTransform, MediaError> {
    let mut violations = Vec::new();

    let width = check_integer(
        "width",
        options.width,
        MIN_DIMENSION,
        MAX_DIMENSION,
        &mut violations,
    );
    let height = check_integer(
        "height",
        options.height,
        MIN_DIMENSION,
        MAX_DIMENSION,
        &mut violations,
    );
    let quality = check_integer(
        "quality",
        options.quality,
        u32::from(MIN_QUALITY),
        u32::from(MAX_QUALITY),
        &mut violations,
    );
    let format = check_enum::<OutputFormat>(options.format.as_deref(), &mut violations);
    let fit = check_enum::<FitMode>(options.fit.as_deref(), &mut violations);
    let focal = check_enum::<Focal>(options.focal.as_deref(), &mut violations);
    let dpr = check_dpr(options.dpr, &mut violations);
    let blur = check_integer(
        "blur",
        options.blur,
        u32::from(MIN_BLUR),
        u32::from(MAX_BLUR),
        &mut violations,
    );

    if !violations.is_empty() {
        return Err(MediaError::InvalidOptions { violations });
    }

    let transform = ImageTransform {
        width,
        height,
        quality: quality.and_then(|q| u8::try_from(q).ok()),
        format,
        fit,
        focal,
        dpr,
        blur: blur.and_then(|b| u8::try_from(b).ok()),
        sharpen: options.sharpen.unwrap_or(false),
    };

    Ok(transform.with_defaults())
}

fn check_integer(
    field: &'static str,
    value: Option<f64>,
    min: u32,
    max: u32,
    violations: &mut Vec<FieldViolation>,
) -> Option<u32> {
    let value = value?;

    if !value.is_finite() {
        violations.push(FieldViolation::new(field, "must be a finite number"));
        return None;
    }
    if value.fract() != 0.0 {
        violations.push(FieldViolation::new(
            field,
            format!("must be an integer, got {}", value),
        ));
        return None;
    }
    if value < f64::from(min) || value > f64::from(max) {
        violations.push(FieldViolation::new(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
        return None;
    }

    Some(value as u32)
}

fn check_dpr(value: Option<f64>, violations: &mut Vec<FieldViolation>) -> Option<f64> {
    let value = value?;

    if !value.is_finite() || !(MIN_DPR..=MAX_DPR).contains(&value) {
        violations.push(FieldViolation::new(
            "dpr",
            format!("must be between {} and {}, got {}", MIN_DPR, MAX_DPR, value),
        ));
        return None;
    }

    Some(value)
}

fn check_enum<T>(value: Option<&str>, violations: &mut Vec<FieldViolation>) -> Option<T>
where
    T: FromStr<Err = FieldViolation>,
{
    match value?.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}
