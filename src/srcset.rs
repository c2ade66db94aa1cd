//! Responsive descriptor (`srcset`) building

use crate::config::ConfigStore;
use crate::constants::DEFAULT_SRCSET_WIDTHS;
use crate::error::MediaError;
use crate::resolver::MediaResolver;
use crate::transform::TransformOptions;

/// Build `"<url> <width>w"` entries joined by `", "`
///
/// Each width replaces the caller's width option and goes through a full
/// resolution. The first failing width aborts the whole set.
pub fn build_descriptors(
    resolver: &MediaResolver<'_>,
    path: &str,
    options: &TransformOptions,
    widths: &[u32],
) -> Result<String, MediaError> {
    let entries = widths
        .iter()
        .map(|&width| {
            let options = options.clone().with_width(width);
            resolver
                .resolve(path, &options)
                .map(|media| format!("{} {}w", media.primary_url, width))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries.join(", "))
}

/// Build a srcset with the store's configuration
///
/// `widths` defaults to [`DEFAULT_SRCSET_WIDTHS`].
pub fn build_src_set(
    store: &ConfigStore,
    path: &str,
    options: &TransformOptions,
    widths: Option<&[u32]>,
) -> Result<String, MediaError> {
    let resolver = store.resolver()?;
    build_descriptors(
        &resolver,
        path,
        options,
        widths.unwrap_or(&DEFAULT_SRCSET_WIDTHS),
    )
}
