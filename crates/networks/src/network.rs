//! Supported network identifiers.
//!
//! Names match the values accepted by the `FORK` environment variable
//! (`main`, `tenderlyMain`, `bsctestnet`, ...).

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Chain family a network belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NetworkFamily {
    Ethereum,
    Polygon,
    XDai,
    Heco,
    Hoo,
    Arbitrum,
    Bsc,
    Okex,
}

/// Identifier of a supported network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NetworkId {
    // Ethereum
    Kovan,
    Ropsten,
    Main,
    Coverage,
    Hardhat,
    Buidlerevm,
    /// Remote fork session hosted by Tenderly.
    TenderlyMain,
    // Polygon
    Matic,
    Mumbai,
    // xDai
    Xdai,
    // Heco
    Heco,
    Htestnet,
    // Hoo
    Hoo,
    // Arbitrum
    Amain,
    Arinkeby,
    // BSC
    Bsc,
    Bsctestnet,
    // OKEx
    Okex,
}

impl NetworkId {
    /// Number of supported networks.
    pub const COUNT: usize = Self::ALL.len();

    /// Every supported network, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Kovan,
        Self::Ropsten,
        Self::Main,
        Self::Coverage,
        Self::Hardhat,
        Self::Buidlerevm,
        Self::TenderlyMain,
        Self::Matic,
        Self::Mumbai,
        Self::Xdai,
        Self::Heco,
        Self::Htestnet,
        Self::Hoo,
        Self::Amain,
        Self::Arinkeby,
        Self::Bsc,
        Self::Bsctestnet,
        Self::Okex,
    ];

    /// Canonical network name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kovan => "kovan",
            Self::Ropsten => "ropsten",
            Self::Main => "main",
            Self::Coverage => "coverage",
            Self::Hardhat => "hardhat",
            Self::Buidlerevm => "buidlerevm",
            Self::TenderlyMain => "tenderlyMain",
            Self::Matic => "matic",
            Self::Mumbai => "mumbai",
            Self::Xdai => "xdai",
            Self::Heco => "heco",
            Self::Htestnet => "htestnet",
            Self::Hoo => "hoo",
            Self::Amain => "amain",
            Self::Arinkeby => "arinkeby",
            Self::Bsc => "bsc",
            Self::Bsctestnet => "bsctestnet",
            Self::Okex => "okex",
        }
    }

    /// Chain family of the network.
    pub const fn family(self) -> NetworkFamily {
        match self {
            Self::Kovan
            | Self::Ropsten
            | Self::Main
            | Self::Coverage
            | Self::Hardhat
            | Self::Buidlerevm
            | Self::TenderlyMain => NetworkFamily::Ethereum,
            Self::Matic | Self::Mumbai => NetworkFamily::Polygon,
            Self::Xdai => NetworkFamily::XDai,
            Self::Heco | Self::Htestnet => NetworkFamily::Heco,
            Self::Hoo => NetworkFamily::Hoo,
            Self::Amain | Self::Arinkeby => NetworkFamily::Arbitrum,
            Self::Bsc | Self::Bsctestnet => NetworkFamily::Bsc,
            Self::Okex => NetworkFamily::Okex,
        }
    }

    /// Whether the network is a development node on the loopback interface.
    pub const fn is_local(self) -> bool {
        matches!(self, Self::Coverage | Self::Hardhat | Self::Buidlerevm)
    }

    /// Slot of this network in dense per-network tables.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownNetwork(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for network in NetworkId::ALL {
            assert_eq!(network.to_string().parse::<NetworkId>().unwrap(), network);
        }
    }

    #[test]
    fn test_serde_name_matches_display() {
        for network in NetworkId::ALL {
            let json = serde_json::to_string(&network).unwrap();
            assert_eq!(json, format!("\"{}\"", network.as_str()));
        }
    }

    #[test]
    fn test_index_matches_position() {
        for (i, network) in NetworkId::ALL.into_iter().enumerate() {
            assert_eq!(network.index(), i);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "mainnet".parse::<NetworkId>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownNetwork(name) if name == "mainnet"));
    }

    #[test]
    fn test_families() {
        assert_eq!(NetworkId::TenderlyMain.family(), NetworkFamily::Ethereum);
        assert_eq!(NetworkId::Bsctestnet.family(), NetworkFamily::Bsc);
        assert_eq!(NetworkId::Arinkeby.family(), NetworkFamily::Arbitrum);
        assert!(NetworkId::Hardhat.is_local());
        assert!(!NetworkId::Main.is_local());
    }
}
