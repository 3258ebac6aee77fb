use std::time::Duration;

use alloy::{
    primitives::{Address as EvmAddress, U256},
    providers::{Provider, RootProvider},
};
use url::Url;
use vmeta_types::Address;

use crate::{error::ChainReadError, vault::IVault};

/// Live accounting reads against a vault contract.
#[async_trait::async_trait]
pub trait StrategyReader: Send + Sync {
    /// The strategy's current share of vault capital, as an integer over
    /// the 10_000 denominator. Any failure here means "exclude this
    /// strategy", nothing more.
    async fn debt_ratio(
        &self,
        vault: &Address,
        strategy: &Address,
    ) -> Result<U256, ChainReadError>;
}

/// [`StrategyReader`] backed by a JSON-RPC node. Every call gets a bounded
/// timeout so one unresponsive node request cannot stall a vault's whole
/// fan-out.
pub struct RpcStrategyReader<P> {
    provider: P,
    call_timeout: Duration,
}

impl RpcStrategyReader<RootProvider> {
    pub fn connect_http(rpc_url: Url, call_timeout: Duration) -> Self {
        Self::new(RootProvider::new_http(rpc_url), call_timeout)
    }
}

impl<P: Provider + Clone> RpcStrategyReader<P> {
    pub const fn new(provider: P, call_timeout: Duration) -> Self {
        Self {
            provider,
            call_timeout,
        }
    }
}

fn parse_address(address: &Address) -> Result<EvmAddress, ChainReadError> {
    address
        .as_str()
        .parse()
        .map_err(|_| ChainReadError::InvalidAddress(address.clone()))
}

#[async_trait::async_trait]
impl<P: Provider + Clone> StrategyReader for RpcStrategyReader<P> {
    async fn debt_ratio(
        &self,
        vault: &Address,
        strategy: &Address,
    ) -> Result<U256, ChainReadError> {
        let vault_addr = parse_address(vault)?;
        let strategy_addr = parse_address(strategy)?;

        let contract = IVault::new(vault_addr, self.provider.clone());
        let record = tokio::time::timeout(
            self.call_timeout,
            contract.strategies(strategy_addr).call(),
        )
        .await
        .map_err(|_| ChainReadError::Timeout(self.call_timeout))??;

        Ok(record.debtRatio)
    }
}
