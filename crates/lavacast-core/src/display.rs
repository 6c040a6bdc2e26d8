//! The upload-and-display operation.
//!
//! Reads the image, computes its identity key, checks whether the server
//! already has it, uploads it if not, then asks the server to display it.
//! The steps run strictly in sequence; a failure at any step halts the rest
//! and earlier side effects (a completed upload, say) are not rolled back.

use crate::api::ApiClient;
use crate::hash;
use crate::host::Host;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const NOTICE_UNREACHABLE: &str = "The configured Lava VTT server is not reachable.";
pub const NOTICE_UPLOAD_FAILED: &str = "Failed to upload image to Lava VTT.";
pub const NOTICE_DISPLAY_FAILED: &str = "Failed to display image in Lava VTT.";

/// Pushes the image at `path` to the server and displays it.
///
/// Returns the image's SHA-1 hex identity key on success. Network failures
/// surface a notice naming the step that failed, then propagate; file-read
/// failures propagate without a notice.
pub fn upload_and_display(api: &ApiClient, host: &dyn Host, path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let hash = hash::sha1_hex(&bytes);
    tracing::debug!("pushing {} ({} bytes, hash {})", path.display(), bytes.len(), hash);

    let exists = api.image_exists(&hash).map_err(|e| {
        host.show_notice(NOTICE_UNREACHABLE);
        e
    })?;

    if !exists {
        api.upload_image(&bytes).map_err(|e| {
            host.show_notice(NOTICE_UPLOAD_FAILED);
            e
        })?;
        tracing::info!("uploaded image {}", hash);
    } else {
        tracing::debug!("image {} already stored, skipping upload", hash);
    }

    api.display(&hash).map_err(|e| {
        host.show_notice(NOTICE_DISPLAY_FAILED);
        e
    })?;
    tracing::info!("displaying image {}", hash);

    Ok(hash)
}
