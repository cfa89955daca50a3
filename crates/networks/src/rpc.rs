//! RPC endpoints per network.

use crate::{env::ProviderKeys, network::NetworkId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Hosted RPC provider backing the Ethereum networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpcProvider {
    Infura,
    Alchemy,
}

impl RpcProvider {
    /// Alchemy when its key is set, Infura otherwise.
    pub fn select(keys: &ProviderKeys) -> Self {
        if keys.alchemy_key.is_empty() {
            Self::Infura
        } else {
            Self::Alchemy
        }
    }

    /// Endpoint for a network served by this provider.
    fn endpoint(self, chain: &str, keys: &ProviderKeys) -> String {
        match self {
            Self::Alchemy => format!("https://eth-{chain}.alchemyapi.io/v2/{}", keys.alchemy_key),
            Self::Infura => format!("https://{chain}.infura.io/v3/{}", keys.infura_key),
        }
    }
}

/// RPC URL of every supported network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcUrlTable {
    provider: RpcProvider,
    urls: [String; NetworkId::COUNT],
}

impl RpcUrlTable {
    /// Build the URL of every network from the provider keys.
    pub fn new(keys: &ProviderKeys) -> Self {
        let provider = RpcProvider::select(keys);
        debug!(?provider, "Selected RPC provider");

        if provider == RpcProvider::Infura && keys.infura_key.is_empty() {
            warn!(
                "Neither ALCHEMY_KEY nor INFURA_KEY is set, hosted Ethereum endpoints have no key"
            );
        }
        if keys.tenderly_fork_id.is_empty() {
            debug!("TENDERLY_FORK_ID is not set");
        }

        let urls = NetworkId::ALL.map(|network| url_for(network, provider, keys));

        Self { provider, urls }
    }

    /// Provider used for the hosted Ethereum networks.
    pub const fn provider(&self) -> RpcProvider {
        self.provider
    }

    /// RPC URL of `network`.
    pub fn get(&self, network: NetworkId) -> &str {
        &self.urls[network.index()]
    }

    /// Every network with its URL, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (NetworkId, &str)> + '_ {
        NetworkId::ALL
            .into_iter()
            .zip(self.urls.iter().map(String::as_str))
    }
}

fn url_for(network: NetworkId, provider: RpcProvider, keys: &ProviderKeys) -> String {
    let hosted = |chain| provider.endpoint(chain, keys);

    match network {
        NetworkId::Kovan => hosted("kovan"),
        NetworkId::Ropsten => hosted("ropsten"),
        NetworkId::Main => hosted("mainnet"),
        NetworkId::Coverage => "http://localhost:8555".to_string(),
        NetworkId::Hardhat | NetworkId::Buidlerevm => "http://localhost:8545".to_string(),
        NetworkId::TenderlyMain => {
            format!("https://rpc.tenderly.co/fork/{}", keys.tenderly_fork_id)
        }
        NetworkId::Htestnet => "https://http-testnet.hecochain.com".to_string(),
        NetworkId::Heco => "https://http-mainnet.hecochain.com".to_string(),
        NetworkId::Hoo => "https://http-mainnet.hoosmartchain.com".to_string(),
        NetworkId::Amain => "https://arbitrum.io/rpc".to_string(),
        NetworkId::Arinkeby => "https://rinkeby.arbitrum.io/rpc".to_string(),
        NetworkId::Bsc => "https://bsc-dataseed1.binance.org".to_string(),
        NetworkId::Bsctestnet => "https://data-seed-prebsc-1-s1.binance.org:8545".to_string(),
        NetworkId::Okex => "https://exchainrpc.okex.org".to_string(),
        NetworkId::Mumbai => "https://rpc-mumbai.maticvigil.com".to_string(),
        NetworkId::Matic => "https://rpc-mainnet.matic.network".to_string(),
        NetworkId::Xdai => "https://rpc.xdaichain.com/".to_string(),
    }
}
