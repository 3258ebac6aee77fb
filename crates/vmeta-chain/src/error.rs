use std::time::Duration;

use thiserror::Error;
use vmeta_types::Address;

/// Why a single strategy read failed.
///
/// These are soft by contract: the aggregation layer excludes the affected
/// strategy and keeps going, it never aborts a vault over one of these.
#[derive(Error, Debug)]
pub enum ChainReadError {
    #[error("Invalid contract address: {0}")]
    InvalidAddress(Address),

    #[error("Contract call failed: {0}")]
    Call(#[from] alloy::contract::Error),

    #[error("Contract call timed out after {0:?}")]
    Timeout(Duration),
}
