//! Network registry for the contract development toolchain.
//!
//! This crate provides:
//! - The closed set of supported networks ([`NetworkId`])
//! - RPC endpoints, default gas prices and pinned fork blocks per network
//! - Fork configuration derived from the environment

pub mod env;
pub mod error;
pub mod fork;
pub mod gas;
pub mod network;
pub mod registry;
pub mod rpc;

pub use env::{EnvSource, ForkSettings, ProcessEnv, ProviderKeys};
pub use error::ConfigError;
pub use fork::{ForkBlockTable, ForkDescriptor};
pub use gas::{DefaultGasTable, GWEI};
pub use network::{NetworkFamily, NetworkId};
pub use registry::{NetworkEntry, NetworkRegistry};
pub use rpc::{RpcProvider, RpcUrlTable};
