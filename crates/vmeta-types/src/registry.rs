use serde::{Deserialize, Serialize};

use crate::address::Address;

/// Underlying token of a vault, as reported by the vault registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
}

/// A strategy as listed under a vault in the registry response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRef {
    pub name: String,
    pub address: Address,
}

/// One vault as returned by the registry's `/vaults/all` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultRecord {
    pub address: Address,
    pub token: TokenInfo,
    #[serde(default)]
    pub strategies: Vec<StrategyRef>,
}

/// A human-authored strategy description document. One document may apply
/// to many deployed instances of the same strategy template, listed in
/// `addresses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyDescription {
    #[serde(default)]
    pub addresses: Vec<Address>,
    pub name: String,
    pub description: String,
}

impl StrategyDescription {
    pub fn applies_to(&self, address: &Address) -> bool {
        self.addresses.contains(address)
    }
}

/// Display/behaviour overrides for a single vault, keyed by the address
/// the metadata file is named after. Every field is optional in the
/// source documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultMetadataOverride {
    #[serde(default)]
    pub address: Address,
    pub comment: Option<String>,
    pub hide_always: Option<bool>,
    pub deposits_disabled: Option<bool>,
    pub withdrawals_disabled: Option<bool>,
    pub apy_override: Option<f64>,
    pub order: Option<i64>,
    pub migration_available: Option<bool>,
    pub allow_zap_in: Option<bool>,
    pub allow_zap_out: Option<bool>,
    pub latest_vault_address: Option<Address>,
}

/// Descriptive metadata for a single token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(default)]
    pub address: Address,
    pub categories: Option<Vec<String>>,
    pub description: Option<String>,
    pub website: Option<String>,
}
