use url::Url;
use vmeta_types::{ChainId, VaultRecord};

use crate::{error::RegistryError, traits::VaultRegistry};

/// Client for the vault aggregation endpoint. The full vault list comes
/// back in one response; there is no pagination.
pub struct LensClient {
    http: reqwest::Client,
    base_url: Url,
    chain: ChainId,
}

impl LensClient {
    pub fn new(base_url: Url, chain: ChainId) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            chain,
        }
    }

    fn vaults_url(&self) -> Result<Url, RegistryError> {
        Ok(self
            .base_url
            .join(&format!("v1/chains/{}/vaults/all", self.chain))?)
    }
}

#[async_trait::async_trait]
impl VaultRegistry for LensClient {
    async fn vaults(&self) -> Result<Vec<VaultRecord>, RegistryError> {
        let vaults: Vec<VaultRecord> = self
            .http
            .get(self.vaults_url()?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(chain = %self.chain, count = vaults.len(), "fetched vault registry");
        Ok(vaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_chain_scoped_vaults_url() {
        let client = LensClient::new(
            Url::parse("https://registry.example.com").unwrap(),
            ChainId::Fantom,
        );
        assert_eq!(
            client.vaults_url().unwrap().as_str(),
            "https://registry.example.com/v1/chains/250/vaults/all"
        );
    }
}
