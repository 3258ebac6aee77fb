use serde::{Deserialize, Serialize};

use crate::address::Address;

/// Resolved metadata for one active strategy.
///
/// `debt_ratio` is the decimal rendering of the on-chain integer (basis
/// points over 10_000), kept as a string for precision on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyMetadata {
    pub address: Address,
    pub name: String,
    pub description: String,
    pub debt_ratio: String,
}

/// The aggregated view of one vault: its active strategies ordered by
/// debt ratio descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultStrategiesMetadata {
    pub vault_address: Address,
    pub strategies_metadata: Vec<StrategyMetadata>,
}
