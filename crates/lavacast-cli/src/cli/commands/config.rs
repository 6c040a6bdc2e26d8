//! `lavacast config` – show or change the persisted server address.

use anyhow::Result;
use lavacast_core::api::ApiClient;
use lavacast_core::settings::{self, Settings};

/// Without `--server`, prints the configured address. With it, validates the
/// new address and persists the complete settings object immediately.
pub async fn run_config(server: Option<&str>) -> Result<()> {
    match server {
        None => {
            let current = settings::load_or_init()?;
            println!("server address: {}", current.server_address);
        }
        Some(address) => {
            // Reject addresses the client could never use before persisting.
            ApiClient::new(address)?;
            let updated = Settings {
                server_address: address.to_string(),
            };
            settings::save(&updated)?;
            println!("server address set to {}", updated.server_address);
        }
    }
    Ok(())
}
