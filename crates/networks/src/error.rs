//! Errors raised while reading network settings.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Network name outside the supported set
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// Fork block override that is not a block height
    #[error("Invalid fork block number {value:?}: {source}")]
    InvalidForkBlock {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
