pub mod error;
pub mod reader;
pub mod vault;

pub use alloy::primitives::U256;
pub use error::ChainReadError;
pub use reader::{RpcStrategyReader, StrategyReader};
