pub mod config;

use alloy_primitives::{utils::format_units, U256};
use networks::{ForkDescriptor, NetworkEntry, NetworkRegistry};
use std::fmt::Write;

/// Format a wei amount in gwei without trailing zeros.
pub fn format_gwei(wei: u128) -> eyre::Result<String> {
    let formatted = format_units(U256::from(wei), "gwei")?;
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    Ok(trimmed.to_string())
}

/// Plain-text listing of every network, one per line.
pub fn render_networks(registry: &NetworkRegistry) -> eyre::Result<String> {
    let mut out = String::new();

    for entry in registry.networks() {
        let gas = match entry.default_gas {
            Some(wei) => format!("{} gwei", format_gwei(wei)?),
            None => "-".to_string(),
        };
        let block = entry
            .fork_block
            .map_or_else(|| "tip".to_string(), |block| block.to_string());

        writeln!(
            out,
            "{:<14} {:<10} {:<8} {}",
            entry.network, gas, block, entry.rpc_url
        )?;
    }

    Ok(out)
}

/// JSON listing of every network.
pub fn render_networks_json(registry: &NetworkRegistry) -> eyre::Result<String> {
    let entries: Vec<NetworkEntry<'_>> = registry.networks().collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Fork descriptor as JSON; `null` when forking is disabled.
pub fn render_fork(fork: Option<&ForkDescriptor>) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(&fork)?)
}
