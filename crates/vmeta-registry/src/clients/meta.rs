use futures::future;
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;
use vmeta_types::{Address, StrategyDescription, TokenMetadata, VaultMetadataOverride};

use crate::{error::RegistryError, traits::MetadataRegistry};

/// Index document published per namespace by the metadata service.
#[derive(Debug, Deserialize)]
struct MetaIndex {
    #[serde(default)]
    files: Vec<String>,
}

/// Client for the off-chain metadata service. Each namespace exposes an
/// index of file names; the documents behind them are fetched one by one.
pub struct MetaClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MetaClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn index(&self, namespace: &str) -> Result<MetaIndex, RegistryError> {
        self.document(namespace, "index").await
    }

    async fn document<T: DeserializeOwned>(
        &self,
        namespace: &str,
        file: &str,
    ) -> Result<T, RegistryError> {
        let url = self.base_url.join(&format!("{namespace}/{file}"))?;
        Ok(self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

/// Address-named files are per-instance overrides; the description join
/// only wants the general template documents.
fn description_files(index: MetaIndex) -> Vec<String> {
    index
        .files
        .into_iter()
        .filter(|file| !Address::looks_like_address(file))
        .collect()
}

#[async_trait::async_trait]
impl MetadataRegistry for MetaClient {
    async fn strategy_descriptions(&self) -> Result<Vec<StrategyDescription>, RegistryError> {
        let files = description_files(self.index("strategies").await?);

        let descriptions = future::try_join_all(
            files
                .iter()
                .map(|file| self.document::<StrategyDescription>("strategies", file)),
        )
        .await?;

        tracing::debug!(count = descriptions.len(), "fetched strategy descriptions");
        Ok(descriptions)
    }

    async fn vault_overrides(&self) -> Result<Vec<VaultMetadataOverride>, RegistryError> {
        let index = self.index("vaults").await?;

        let overrides = future::try_join_all(index.files.iter().map(|file| async move {
            let mut doc: VaultMetadataOverride = self.document("vaults", file).await?;
            // The document carries no address; the file is named after it.
            doc.address = Address::new(file);
            Ok::<_, RegistryError>(doc)
        }))
        .await?;

        tracing::debug!(count = overrides.len(), "fetched vault overrides");
        Ok(overrides)
    }

    async fn token_metadata(
        &self,
        address: &Address,
    ) -> Result<Option<TokenMetadata>, RegistryError> {
        match self
            .document::<TokenMetadata>("tokens", address.as_str())
            .await
        {
            Ok(mut doc) => {
                doc.address = address.clone();
                Ok(Some(doc))
            }
            Err(err) => {
                tracing::debug!(token = %address, error = %err, "token metadata lookup failed");
                Ok(None)
            }
        }
    }
}
