//! Media path sanitization
//!
//! Rejects paths that could escape the media root or smuggle markup into a
//! generated URL, then normalizes what is left:
//! - `..` in any spelling (plain, `%2e%2e`, `%252e`, mixed `.%2e`)
//! - `.\` (Windows-style parent reference)
//! - null bytes, `<`, `>`, and the Windows-reserved `:"|?*`
//!
//! Normalization converts `\` to `/`, collapses repeated slashes and strips
//! leading slashes. The check is purely textual; the filesystem is never
//! consulted.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_PATH_LENGTH;
use crate::error::MediaError;

const RESERVED_CHARS: [char; 5] = [':', '"', '|', '?', '*'];

/// A relative media path that passed [`sanitize_path`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedPath(String);

impl SanitizedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SanitizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SanitizedPath {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        sanitize_path(s)
    }
}

/// Validate and normalize a user supplied media path
pub fn sanitize_path(raw: &str) -> Result<SanitizedPath, MediaError> {
    if raw.is_empty() {
        return Err(MediaError::invalid_path(raw, "path is empty"));
    }

    let length = raw.chars().count();
    if length > MAX_PATH_LENGTH {
        return Err(MediaError::invalid_path(
            truncate_for_report(raw),
            format!("path length {} exceeds limit {}", length, MAX_PATH_LENGTH),
        ));
    }

    check_forbidden_patterns(raw)?;

    let normalized = normalize_separators(raw);
    if normalized.is_empty() {
        return Err(MediaError::invalid_path(
            raw,
            "path is empty after normalization",
        ));
    }

    Ok(SanitizedPath(normalized))
}

fn check_forbidden_patterns(path: &str) -> Result<(), MediaError> {
    let reject = |reason: &str| Err(MediaError::invalid_path(path, reason));

    if path.contains("..") {
        return reject("parent directory reference");
    }
    if path.contains(".\\") {
        return reject("dot-backslash sequence");
    }

    let path_lower = path.to_lowercase();
    if path_lower.contains("%2e%2e") || path_lower.contains("%252e") {
        return reject("encoded parent directory reference");
    }

    // Catches mixed spellings such as `.%2e` and `%2E.`. Decoded bytes need
    // not be UTF-8; Latin-1 escapes like `caf%E9` are legitimate keys.
    let decoded = urlencoding::decode_binary(path.as_bytes());
    if decoded.windows(2).any(|pair| pair == b"..") {
        return reject("encoded parent directory reference");
    }

    if path.contains('\0') {
        return reject("null byte");
    }
    if path.contains(['<', '>']) {
        return reject("angle bracket");
    }
    if let Some(ch) = path.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(MediaError::invalid_path(
            path,
            format!("reserved character '{}'", ch),
        ));
    }

    Ok(())
}

/// Backslashes become slashes, runs of slashes collapse, leading slashes go.
fn normalize_separators(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    for ch in path.chars() {
        let ch = if ch == '\\' { '/' } else { ch };
        if ch == '/' && (normalized.is_empty() || normalized.ends_with('/')) {
            continue;
        }
        normalized.push(ch);
    }
    normalized
}

fn truncate_for_report(path: &str) -> String {
    let head: String = path.chars().take(64).collect();
    format!("{}...", head)
}
