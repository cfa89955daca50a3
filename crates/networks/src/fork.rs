//! Fork targets.

use crate::network::NetworkId;
use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Networks forked at a fixed height instead of the chain tip.
const BLOCK_TO_FORK: [(NetworkId, BlockNumber); 2] = [
    (NetworkId::Main, 12_406_069),
    (NetworkId::TenderlyMain, 12_406_069),
];

/// Pinned fork block per network. Absent means "fork from the tip".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkBlockTable(BTreeMap<NetworkId, BlockNumber>);

impl Default for ForkBlockTable {
    fn default() -> Self {
        Self(BLOCK_TO_FORK.into_iter().collect())
    }
}

impl ForkBlockTable {
    /// Pinned fork block of `network`, if any.
    pub fn get(&self, network: NetworkId) -> Option<BlockNumber> {
        self.0.get(&network).copied()
    }

    /// Entries ordered by network.
    pub fn iter(&self) -> impl Iterator<Item = (NetworkId, BlockNumber)> + '_ {
        self.0.iter().map(|(network, block)| (*network, *block))
    }
}

impl FromIterator<(NetworkId, BlockNumber)> for ForkBlockTable {
    fn from_iter<I: IntoIterator<Item = (NetworkId, BlockNumber)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Forking configuration handed to the development node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkDescriptor {
    /// RPC endpoint of the chain to replay
    pub url: String,
    /// Block to fork at; the chain tip when `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<BlockNumber>,
}
