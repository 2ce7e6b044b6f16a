//! Writes canonical networks, one per line.

use crate::models::NetworkRecord;
use std::error::Error;

/// Render networks as newline-terminated canonical forms.
pub fn render(networks: &[NetworkRecord]) -> String {
    networks.iter().map(|n| format!("{n}\n")).collect()
}

/// Write the networks to `path`, replacing any existing file.
pub fn write_output(path: &str, networks: &[NetworkRecord]) -> Result<(), Box<dyn Error>> {
    log::info!("Writing {} networks to {path}", networks.len());
    std::fs::write(path, render(networks))
        .map_err(|e| format!("Error writing output file {path}: {e}"))?;
    Ok(())
}
