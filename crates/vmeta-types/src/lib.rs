pub mod address;
pub mod chain;
pub mod metadata;
pub mod registry;

pub use address::Address;
pub use chain::{ChainId, UnsupportedChainId};
pub use metadata::{StrategyMetadata, VaultStrategiesMetadata};
pub use registry::{
    StrategyDescription, StrategyRef, TokenInfo, TokenMetadata, VaultMetadataOverride, VaultRecord,
};
