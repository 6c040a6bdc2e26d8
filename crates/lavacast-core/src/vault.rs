//! Resolution of displayed image references to files inside the vault.
//!
//! The host renders images from sources like `media/map.png?v=3` or
//! `app://local/media/map.png`; resolving one back to a concrete file is the
//! step the rest of the pipeline depends on. A reference that cannot be
//! resolved to a regular file inside the vault root yields `None` and the
//! caller takes no action.

use std::path::{Component, Path, PathBuf};

/// The host application's local file collection, rooted at one directory.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a displayed image reference to a regular file under the root.
    ///
    /// Strips a query string or fragment, percent-decodes the path portion,
    /// and joins it to the root. Returns `None` if the decoded path escapes
    /// the root, does not exist, or is not a regular file.
    pub fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let path_part = strip_suffixes(reference);
        let decoded = percent_decode(path_part)?;
        if decoded.is_empty() {
            return None;
        }

        let relative = normalize_relative(Path::new(&decoded))?;
        let full = self.root.join(relative);
        if full.is_file() {
            Some(full)
        } else {
            None
        }
    }
}

/// Drops a `?query` or `#fragment` suffix from a reference.
fn strip_suffixes(reference: &str) -> &str {
    let end = reference
        .find(|c| c == '?' || c == '#')
        .unwrap_or(reference.len());
    &reference[..end]
}

/// Rejects absolute paths and any `..` component so a reference cannot
/// escape the vault root.
fn normalize_relative(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if out.as_os_str().is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Minimal percent-decoding for path references; returns `None` on malformed
/// escapes or non-UTF-8 results.
fn percent_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1)?;
            let lo = bytes.get(i + 2)?;
            let hex = [*hi, *lo];
            let hex = std::str::from_utf8(&hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
