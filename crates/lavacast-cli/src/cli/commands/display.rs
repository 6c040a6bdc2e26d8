//! `lavacast display <reference>` – upload and display an image.

use anyhow::Result;
use lavacast_core::action::{context_action, ClickedElement};
use lavacast_core::api::ApiClient;
use lavacast_core::display::upload_and_display;
use lavacast_core::host::StderrHost;
use lavacast_core::vault::Vault;
use std::path::{Path, PathBuf};

/// Pushes the referenced image to the server at `address` and displays it.
///
/// With a vault, the reference goes through the same gate the host's context
/// menu uses; a reference that yields no action is silently ignored.
pub async fn run_display(address: &str, reference: &str, vault: Option<&Path>) -> Result<()> {
    let path = match vault {
        Some(root) => {
            let vault = Vault::new(root);
            let element = ClickedElement::new("img", reference);
            match context_action(&vault, &element) {
                Some(action) => action.path,
                None => {
                    tracing::debug!("no action for reference {:?}, ignoring", reference);
                    return Ok(());
                }
            }
        }
        None => PathBuf::from(reference),
    };

    let api = ApiClient::new(address)?;
    let host = StderrHost;
    let hash = upload_and_display(&api, &host, &path)?;
    println!("Displaying {} ({})", path.display(), hash);
    Ok(())
}
