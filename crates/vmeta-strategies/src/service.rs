use std::sync::Arc;

use futures::future;
use vmeta_cache::CachedFetcher;
use vmeta_chain::{RpcStrategyReader, StrategyReader, U256};
use vmeta_registry::{LensClient, MetaClient, MetadataRegistry, VaultRegistry};
use vmeta_types::{
    Address, ChainId, StrategyDescription, StrategyMetadata, StrategyRef, VaultRecord,
    VaultStrategiesMetadata,
};

use crate::{config::Config, error::StrategiesError};

/// Cache key for the assembled collection; scoped per chain by the fetcher.
const CACHE_OPERATION: &str = "strategies/metadata/get";

/// Served when no description document claims a strategy's address.
const FALLBACK_DESCRIPTION: &str = "I don't have a description for this strategy yet";

/// Placeholder substituted with the vault's token symbol.
const TOKEN_PLACEHOLDER: &str = "{{token}}";

/// Joins the vault registry, the metadata service and per-strategy chain
/// reads into one consistent per-vault view, cached as a whole.
pub struct StrategyService {
    vault_registry: Arc<dyn VaultRegistry>,
    metadata_registry: Arc<dyn MetadataRegistry>,
    reader: Arc<dyn StrategyReader>,
    cache: CachedFetcher<Vec<VaultStrategiesMetadata>>,
    chain: ChainId,
}

impl StrategyService {
    pub fn new(
        config: &Config,
        vault_registry: Arc<dyn VaultRegistry>,
        metadata_registry: Arc<dyn MetadataRegistry>,
        reader: Arc<dyn StrategyReader>,
    ) -> Self {
        Self {
            vault_registry,
            metadata_registry,
            reader,
            cache: CachedFetcher::new(CACHE_OPERATION, config.chain, config.cache_ttl),
            chain: config.chain,
        }
    }

    /// Wires up the production clients from a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config,
            Arc::new(LensClient::new(config.lens_url.clone(), config.chain)),
            Arc::new(MetaClient::new(config.meta_url.clone())),
            Arc::new(RpcStrategyReader::connect_http(
                config.rpc_url.clone(),
                config.read_timeout,
            )),
        )
    }

    /// The aggregated strategy metadata for the requested vaults, or for
    /// every known vault when no filter is given.
    ///
    /// Registry failures abort the call. A requested address the registry
    /// does not know, a failed on-chain read, or a strategy holding no
    /// capital all just shrink the result.
    pub async fn vaults_strategies_metadata(
        &self,
        vault_addresses: Option<&[Address]>,
    ) -> Result<Vec<VaultStrategiesMetadata>, StrategiesError> {
        if let Some(cached) = self.cache.fetch().await {
            return Ok(cached);
        }

        let (vaults, descriptions) = future::try_join(
            self.vault_registry.vaults(),
            self.metadata_registry.strategy_descriptions(),
        )
        .await?;

        // Unknown requested addresses are dropped here, silently.
        let selected: Vec<&VaultRecord> = match vault_addresses {
            Some(requested) => requested
                .iter()
                .filter_map(|address| vaults.iter().find(|vault| &vault.address == address))
                .collect(),
            None => vaults.iter().collect(),
        };

        // One concurrent branch per vault; results keep input order, not
        // completion order.
        let assembled: Vec<VaultStrategiesMetadata> = future::join_all(
            selected
                .into_iter()
                .map(|vault| self.vault_strategies_metadata(vault, &descriptions)),
        )
        .await
        .into_iter()
        .flatten()
        .collect();

        tracing::debug!(chain = %self.chain, vaults = assembled.len(), "assembled strategy metadata");

        self.cache.store(assembled.clone()).await;
        Ok(assembled)
    }

    /// Builds one vault's record, or `None` when the vault has nothing to
    /// show: no listed strategies, or none surviving the debt-ratio filter.
    async fn vault_strategies_metadata(
        &self,
        vault: &VaultRecord,
        descriptions: &[StrategyDescription],
    ) -> Option<VaultStrategiesMetadata> {
        if vault.strategies.is_empty() {
            return None;
        }

        let reads = future::join_all(vault.strategies.iter().map(|strategy| async move {
            match self.reader.debt_ratio(&vault.address, &strategy.address).await {
                Ok(ratio) => Some((strategy, ratio)),
                Err(err) => {
                    tracing::debug!(
                        vault = %vault.address,
                        strategy = %strategy.address,
                        error = %err,
                        "excluding strategy: on-chain read failed",
                    );
                    None
                }
            }
        }))
        .await;

        // A strategy holding no capital is not active.
        let mut active: Vec<(&StrategyRef, U256)> = reads
            .into_iter()
            .flatten()
            .filter(|(_, ratio)| !ratio.is_zero())
            .collect();

        if active.is_empty() {
            return None;
        }

        // Stable sort: equal ratios keep the registry's listing order.
        active.sort_by(|lhs, rhs| rhs.1.cmp(&lhs.1));

        let strategies_metadata = active
            .into_iter()
            .map(|(strategy, ratio)| {
                resolve_metadata(strategy, ratio, &vault.token.symbol, descriptions)
            })
            .collect();

        Some(VaultStrategiesMetadata {
            vault_address: vault.address.clone(),
            strategies_metadata,
        })
    }
}

/// Resolves one strategy's display name and description against the
/// description documents, falling back to the registry name and the fixed
/// placeholder text.
fn resolve_metadata(
    strategy: &StrategyRef,
    ratio: U256,
    token_symbol: &str,
    descriptions: &[StrategyDescription],
) -> StrategyMetadata {
    let mut claims = descriptions
        .iter()
        .filter(|description| description.applies_to(&strategy.address));

    let matched = claims.next();
    if claims.next().is_some() {
        // Duplicate claims are a data-quality problem in the description
        // set; first match wins, matching the iteration order of the index.
        tracing::warn!(
            strategy = %strategy.address,
            "multiple description documents claim this address, using the first",
        );
    }

    let name = matched
        .map(|description| description.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(&strategy.name)
        .to_owned();

    let description = matched
        .map(|description| description.description.replace(TOKEN_PLACEHOLDER, token_symbol))
        .filter(|description| !description.is_empty())
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_owned());

    StrategyMetadata {
        address: strategy.address.clone(),
        name,
        description,
        debt_ratio: ratio.to_string(),
    }
}
