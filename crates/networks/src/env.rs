//! Environment inputs.
//!
//! Everything the registry reads comes through an [`EnvSource`], so tables
//! and fork descriptors can be built from the process environment, a parsed
//! settings file, or a plain map in tests.

use crate::{error::ConfigError, network::NetworkId};
use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Infura project key (primary provider).
pub const INFURA_KEY: &str = "INFURA_KEY";
/// Alchemy API key (alternate provider, preferred when set).
pub const ALCHEMY_KEY: &str = "ALCHEMY_KEY";
/// Tenderly fork session id.
pub const TENDERLY_FORK_ID: &str = "TENDERLY_FORK_ID";
/// Name of the network to fork from.
pub const FORK: &str = "FORK";
/// Block height to pin the fork at.
pub const FORK_BLOCK_NUMBER: &str = "FORK_BLOCK_NUMBER";

/// A source of environment variables.
pub trait EnvSource {
    /// Raw value of `key`, if present.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating an empty string as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }

    /// Consult `fallback` for keys this source does not set.
    fn or<F>(self, fallback: F) -> Layered<Self, F>
    where
        Self: Sized,
        F: EnvSource,
    {
        Layered {
            primary: self,
            fallback,
        }
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Two sources, the first taking precedence over the second.
#[derive(Debug, Clone)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P: EnvSource, F: EnvSource> EnvSource for Layered<P, F> {
    fn var(&self, key: &str) -> Option<String> {
        self.primary
            .non_empty(key)
            .or_else(|| self.fallback.var(key))
    }
}

/// Provider credentials read once when the registry is built.
///
/// Missing variables become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderKeys {
    pub infura_key: String,
    pub alchemy_key: String,
    pub tenderly_fork_id: String,
}

impl ProviderKeys {
    /// Read the provider keys, defaulting missing ones to empty strings.
    pub fn from_env(env: &impl EnvSource) -> Self {
        Self {
            infura_key: env.non_empty(INFURA_KEY).unwrap_or_default(),
            alchemy_key: env.non_empty(ALCHEMY_KEY).unwrap_or_default(),
            tenderly_fork_id: env.non_empty(TENDERLY_FORK_ID).unwrap_or_default(),
        }
    }
}

/// Fork request read from the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkSettings {
    /// Network to fork from; `None` disables forking.
    pub network: Option<NetworkId>,
    /// Explicit block height, overriding the pinned block of the network.
    pub block_number: Option<BlockNumber>,
}

impl ForkSettings {
    /// Parse `FORK` and `FORK_BLOCK_NUMBER`.
    ///
    /// The block override is only read when `FORK` names a network. A block
    /// override of `0` counts as unset.
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let Some(network) = env
            .non_empty(FORK)
            .map(|name| name.parse::<NetworkId>())
            .transpose()?
        else {
            return Ok(Self::default());
        };

        let block_number = env
            .non_empty(FORK_BLOCK_NUMBER)
            .map(|value| {
                value
                    .trim()
                    .parse::<BlockNumber>()
                    .map_err(|source| ConfigError::InvalidForkBlock { value, source })
            })
            .transpose()?
            .filter(|block| *block != 0);

        Ok(Self {
            network: Some(network),
            block_number,
        })
    }
}
