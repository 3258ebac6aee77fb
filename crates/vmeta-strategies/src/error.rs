use thiserror::Error;
use vmeta_registry::RegistryError;

/// Failures that abort a whole aggregation call.
///
/// Only registry fetches can end up here. On-chain read failures and cache
/// misbehaviour are absorbed into filtering and never surface as errors.
#[derive(Error, Debug)]
pub enum StrategiesError {
    #[error("Registry fetch failed: {0}")]
    Registry(#[from] RegistryError),
}
