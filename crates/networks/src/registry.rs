//! Per-network parameters assembled from the environment.
//!
//! A [`NetworkRegistry`] is built once at startup and is read-only afterwards.
//! Fork descriptors are derived on demand from the current environment.

use crate::{
    env::{EnvSource, ForkSettings, ProviderKeys},
    error::ConfigError,
    fork::{ForkBlockTable, ForkDescriptor},
    gas::DefaultGasTable,
    network::NetworkId,
    rpc::RpcUrlTable,
};
use alloy_primitives::BlockNumber;
use serde::Serialize;
use tracing::debug;

/// Resolved parameters of a single network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEntry<'a> {
    pub network: NetworkId,
    pub rpc_url: &'a str,
    pub default_gas: Option<u128>,
    pub fork_block: Option<BlockNumber>,
}

/// RPC URLs, default gas prices and pinned fork blocks of every network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    rpc_urls: RpcUrlTable,
    default_gas: DefaultGasTable,
    fork_blocks: ForkBlockTable,
}

impl NetworkRegistry {
    /// Build the registry with the built-in gas and fork block tables.
    pub fn new(keys: &ProviderKeys) -> Self {
        Self {
            rpc_urls: RpcUrlTable::new(keys),
            default_gas: DefaultGasTable::default(),
            fork_blocks: ForkBlockTable::default(),
        }
    }

    /// Build the registry from the provider keys found in `env`.
    pub fn from_env(env: &impl EnvSource) -> Self {
        Self::new(&ProviderKeys::from_env(env))
    }

    /// Replace the default gas table.
    pub fn with_default_gas(mut self, default_gas: DefaultGasTable) -> Self {
        self.default_gas = default_gas;
        self
    }

    /// Replace the pinned fork block table.
    pub fn with_fork_blocks(mut self, fork_blocks: ForkBlockTable) -> Self {
        self.fork_blocks = fork_blocks;
        self
    }

    /// RPC URL of `network`.
    pub fn rpc_url(&self, network: NetworkId) -> &str {
        self.rpc_urls.get(network)
    }

    /// Default gas price of `network` in wei, if it has one.
    pub fn default_gas(&self, network: NetworkId) -> Option<u128> {
        self.default_gas.get(network)
    }

    /// Pinned fork block of `network`, if any.
    pub fn fork_block(&self, network: NetworkId) -> Option<BlockNumber> {
        self.fork_blocks.get(network)
    }

    /// The RPC URL table.
    pub const fn rpc_urls(&self) -> &RpcUrlTable {
        &self.rpc_urls
    }

    /// The default gas table.
    pub const fn default_gas_table(&self) -> &DefaultGasTable {
        &self.default_gas
    }

    /// The pinned fork block table.
    pub const fn fork_block_table(&self) -> &ForkBlockTable {
        &self.fork_blocks
    }

    /// Every network with its resolved parameters.
    pub fn networks(&self) -> impl Iterator<Item = NetworkEntry<'_>> + '_ {
        self.rpc_urls.iter().map(|(network, rpc_url)| NetworkEntry {
            network,
            rpc_url,
            default_gas: self.default_gas(network),
            fork_block: self.fork_block(network),
        })
    }

    /// Fork descriptor for already parsed settings.
    ///
    /// The block is the explicit override if any, then the pinned block of
    /// the network, otherwise left unset to fork from the tip.
    pub fn fork_config(&self, settings: &ForkSettings) -> Option<ForkDescriptor> {
        let network = settings.network?;
        let block_number = settings.block_number.or_else(|| self.fork_block(network));

        debug!(%network, ?block_number, "Resolved fork target");

        Some(ForkDescriptor {
            url: self.rpc_url(network).to_string(),
            block_number,
        })
    }

    /// Fork descriptor requested by `FORK` and `FORK_BLOCK_NUMBER`.
    ///
    /// Returns `Ok(None)` when `FORK` is unset or empty.
    pub fn build_fork_config(
        &self,
        env: &impl EnvSource,
    ) -> Result<Option<ForkDescriptor>, ConfigError> {
        let settings = ForkSettings::from_env(env)?;
        Ok(self.fork_config(&settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ALCHEMY_KEY, FORK, FORK_BLOCK_NUMBER, INFURA_KEY, TENDERLY_FORK_ID};
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_fork_target() {
        let env = env(&[(INFURA_KEY, "key")]);
        let registry = NetworkRegistry::from_env(&env);
        assert_eq!(registry.build_fork_config(&env).unwrap(), None);
    }

    #[test]
    fn test_fork_main_uses_pinned_block() {
        let env = env(&[(INFURA_KEY, "key"), (FORK, "main")]);
        let registry = NetworkRegistry::from_env(&env);

        let fork = registry.build_fork_config(&env).unwrap().unwrap();
        assert_eq!(fork.url, registry.rpc_url(NetworkId::Main));
        assert_eq!(fork.url, "https://mainnet.infura.io/v3/key");
        assert_eq!(fork.block_number, Some(12406069));
    }

    #[test]
    fn test_override_beats_pinned_block() {
        let env = env(&[(FORK, "main"), (FORK_BLOCK_NUMBER, "100")]);
        let registry = NetworkRegistry::from_env(&env);

        let fork = registry.build_fork_config(&env).unwrap().unwrap();
        assert_eq!(fork.block_number, Some(100));
    }

    #[test]
    fn test_bad_block_ignored_when_fork_disabled() {
        let env = env(&[(FORK, ""), (FORK_BLOCK_NUMBER, "latest")]);
        let registry = NetworkRegistry::from_env(&env);
        assert_eq!(registry.build_fork_config(&env).unwrap(), None);
    }

    #[test]
    fn test_zero_override_keeps_pinned_block() {
        let env = env(&[(FORK, "main"), (FORK_BLOCK_NUMBER, "0")]);
        let registry = NetworkRegistry::from_env(&env);

        let fork = registry.build_fork_config(&env).unwrap().unwrap();
        assert_eq!(fork.block_number, Some(12406069));
    }

    #[test]
    fn test_override_with_whitespace() {
        let env = env(&[(FORK, "main"), (FORK_BLOCK_NUMBER, " 100 ")]);
        let registry = NetworkRegistry::from_env(&env);

        let fork = registry.build_fork_config(&env).unwrap().unwrap();
        assert_eq!(fork.block_number, Some(100));
    }

    #[test]
    fn test_unpinned_network_forks_from_tip() {
        let env = env(&[(ALCHEMY_KEY, "alchemy"), (FORK, "kovan")]);
        let registry = NetworkRegistry::from_env(&env);

        let fork = registry.build_fork_config(&env).unwrap().unwrap();
        assert_eq!(fork.url, "https://eth-kovan.alchemyapi.io/v2/alchemy");
        assert_eq!(fork.block_number, None);
    }

    #[test]
    fn test_override_on_unpinned_network() {
        let env = env(&[(FORK, "bsc"), (FORK_BLOCK_NUMBER, "7000000")]);
        let registry = NetworkRegistry::from_env(&env);

        let fork = registry.build_fork_config(&env).unwrap().unwrap();
        assert_eq!(fork.url, "https://bsc-dataseed1.binance.org");
        assert_eq!(fork.block_number, Some(7_000_000));
    }

    #[test]
    fn test_tenderly_fork() {
        let env = env(&[(TENDERLY_FORK_ID, "session"), (FORK, "tenderlyMain")]);
        let registry = NetworkRegistry::from_env(&env);

        let fork = registry.build_fork_config(&env).unwrap().unwrap();
        assert_eq!(fork.url, "https://rpc.tenderly.co/fork/session");
        assert_eq!(fork.block_number, Some(12406069));
    }

    #[test]
    fn test_unknown_fork_target_fails() {
        let env = env(&[(FORK, "goerli")]);
        let registry = NetworkRegistry::from_env(&env);

        let err = registry.build_fork_config(&env).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownNetwork(_)));
    }

    #[test]
    fn test_build_fork_config_is_idempotent() {
        let env = env(&[(INFURA_KEY, "key"), (FORK, "main")]);
        let registry = NetworkRegistry::from_env(&env);

        let first = registry.build_fork_config(&env).unwrap();
        let second = registry.build_fork_config(&env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_tables() {
        let registry = NetworkRegistry::new(&ProviderKeys::default())
            .with_default_gas([(NetworkId::Main, 5)].into_iter().collect())
            .with_fork_blocks([(NetworkId::Hardhat, 42)].into_iter().collect());

        assert_eq!(registry.default_gas(NetworkId::Main), Some(5));
        assert_eq!(registry.default_gas(NetworkId::Kovan), None);
        assert_eq!(registry.fork_block(NetworkId::Main), None);

        let settings = ForkSettings {
            network: Some(NetworkId::Hardhat),
            block_number: None,
        };
        let fork = registry.fork_config(&settings).unwrap();
        assert_eq!(fork.url, "http://localhost:8545");
        assert_eq!(fork.block_number, Some(42));
    }

    #[test]
    fn test_networks_cover_all() {
        let registry = NetworkRegistry::new(&ProviderKeys::default());
        let entries: Vec<_> = registry.networks().collect();

        assert_eq!(entries.len(), NetworkId::COUNT);
        let main = entries
            .iter()
            .find(|entry| entry.network == NetworkId::Main)
            .unwrap();
        assert_eq!(main.default_gas, Some(65 * crate::GWEI));
        assert_eq!(main.fork_block, Some(12406069));
    }
}
