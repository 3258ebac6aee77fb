use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Networks the aggregation pipeline knows about, carried as the numeric
/// chain id in cache keys and registry paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    #[default]
    Mainnet,
    Optimism,
    Fantom,
    Arbitrum,
}

impl ChainId {
    pub const fn id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Optimism => 10,
            Self::Fantom => 250,
            Self::Arbitrum => 42161,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

#[derive(Debug, Error)]
#[error("unsupported chain id: {0}")]
pub struct UnsupportedChainId(pub u64);

impl TryFrom<u64> for ChainId {
    type Error = UnsupportedChainId;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Self::Mainnet),
            10 => Ok(Self::Optimism),
            250 => Ok(Self::Fantom),
            42161 => Ok(Self::Arbitrum),
            other => Err(UnsupportedChainId(other)),
        }
    }
}
