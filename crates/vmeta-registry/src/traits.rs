use vmeta_types::{
    Address, StrategyDescription, TokenMetadata, VaultMetadataOverride, VaultRecord,
};

use crate::error::RegistryError;

/// The vault aggregation service: the single source of truth for which
/// vaults exist and which strategies they list. A failed fetch here fails
/// the whole aggregation; callers retry if they want to.
#[async_trait::async_trait]
pub trait VaultRegistry: Send + Sync {
    async fn vaults(&self) -> Result<Vec<VaultRecord>, RegistryError>;
}

/// The off-chain metadata service: human-authored descriptions and
/// per-vault overrides, published as an index of files per namespace.
#[async_trait::async_trait]
pub trait MetadataRegistry: Send + Sync {
    /// Every general (non-address-keyed) strategy description document.
    async fn strategy_descriptions(&self) -> Result<Vec<StrategyDescription>, RegistryError>;

    /// Every vault override document, keyed by the file's address.
    async fn vault_overrides(&self) -> Result<Vec<VaultMetadataOverride>, RegistryError>;

    /// Descriptive metadata for one token; `None` when the lookup fails.
    async fn token_metadata(
        &self,
        address: &Address,
    ) -> Result<Option<TokenMetadata>, RegistryError>;
}
