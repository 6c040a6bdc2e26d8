//! Hash command: compute the SHA-1 identity key of a file.

use anyhow::Result;
use lavacast_core::hash;
use std::path::Path;

/// Compute and print the SHA-1 identity key of the given file.
pub async fn run_hash(path: &Path) -> Result<()> {
    let digest = hash::sha1_path(path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
