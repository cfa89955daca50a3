//! Default gas prices.

use crate::network::NetworkId;
use std::collections::BTreeMap;

/// One gwei, in wei.
pub const GWEI: u128 = 1_000_000_000;

/// Gas price used on each network when the caller does not set one, in wei.
const DEFAULT_GAS: [(NetworkId, u128); 18] = [
    (NetworkId::Htestnet, 65 * GWEI),
    (NetworkId::Heco, 3 * GWEI),
    (NetworkId::Hoo, GWEI),
    (NetworkId::Amain, GWEI),
    (NetworkId::Arinkeby, GWEI),
    (NetworkId::Bsc, GWEI),
    (NetworkId::Bsctestnet, GWEI),
    (NetworkId::Okex, GWEI),
    (NetworkId::Kovan, GWEI),
    (NetworkId::Ropsten, 65 * GWEI),
    (NetworkId::Main, 65 * GWEI),
    (NetworkId::Coverage, 65 * GWEI),
    (NetworkId::Hardhat, 65 * GWEI),
    (NetworkId::Buidlerevm, 65 * GWEI),
    // 0.01 gwei
    (NetworkId::TenderlyMain, GWEI / 100),
    (NetworkId::Mumbai, GWEI),
    (NetworkId::Matic, GWEI),
    (NetworkId::Xdai, GWEI),
];

/// Default gas price per network.
///
/// Not every network is required to have an entry; a missing entry means
/// "no override".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultGasTable(BTreeMap<NetworkId, u128>);

impl Default for DefaultGasTable {
    fn default() -> Self {
        Self(DEFAULT_GAS.into_iter().collect())
    }
}

impl DefaultGasTable {
    /// Default gas price of `network` in wei, if it has one.
    pub fn get(&self, network: NetworkId) -> Option<u128> {
        self.0.get(&network).copied()
    }

    /// Entries ordered by network.
    pub fn iter(&self) -> impl Iterator<Item = (NetworkId, u128)> + '_ {
        self.0.iter().map(|(network, gas)| (*network, *gas))
    }
}

impl FromIterator<(NetworkId, u128)> for DefaultGasTable {
    fn from_iter<I: IntoIterator<Item = (NetworkId, u128)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let table = DefaultGasTable::default();
        assert_eq!(table.get(NetworkId::Main), Some(65_000_000_000));
        assert_eq!(table.get(NetworkId::Heco), Some(3_000_000_000));
        assert_eq!(table.get(NetworkId::Bsc), Some(1_000_000_000));
        assert_eq!(table.get(NetworkId::TenderlyMain), Some(10_000_000));
    }

    #[test]
    fn test_all_prices_positive() {
        for (network, gas) in DefaultGasTable::default().iter() {
            assert!(gas > 0, "{network} has a zero gas price");
            if network != NetworkId::TenderlyMain {
                assert_eq!(gas % GWEI, 0, "{network} is not a whole number of gwei");
            }
        }
    }

    #[test]
    fn test_partial_table() {
        let table: DefaultGasTable = [(NetworkId::Main, 2 * GWEI)].into_iter().collect();
        assert_eq!(table.get(NetworkId::Main), Some(2 * GWEI));
        assert_eq!(table.get(NetworkId::Hardhat), None);
    }
}
