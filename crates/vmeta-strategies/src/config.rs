use std::{env, time::Duration};

use thiserror::Error;
use url::Url;
use vmeta_types::ChainId;

/// Runtime configuration for the aggregation service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the vault aggregation service.
    pub lens_url: Url,
    /// Base URL of the off-chain metadata service.
    pub meta_url: Url,
    /// JSON-RPC node used for per-strategy accounting reads.
    pub rpc_url: Url,
    pub chain: ChainId,
    /// How long an assembled collection stays fresh in the cache.
    pub cache_ttl: Duration,
    /// Upper bound on a single on-chain read.
    pub read_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lens_url: Url::parse("https://d28fcsszptni1s.cloudfront.net/")
                .expect("static url parses"),
            meta_url: Url::parse("https://meta.yearn.network/").expect("static url parses"),
            rpc_url: Url::parse("https://eth.llamarpc.com/").expect("static url parses"),
            chain: ChainId::Mainnet,
            cache_ttl: Duration::from_secs(30),
            read_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },

    #[error("{var} is not a valid number: {value}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} names an unsupported chain id: {value}")]
    UnsupportedChain { var: &'static str, value: String },
}

impl Config {
    /// Reads overrides from the environment, keeping defaults for any
    /// variable that is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("VMETA_LENS_URL") {
            config.lens_url = parse_url("VMETA_LENS_URL", &raw)?;
        }
        if let Some(raw) = lookup("VMETA_META_URL") {
            config.meta_url = parse_url("VMETA_META_URL", &raw)?;
        }
        if let Some(raw) = lookup("VMETA_RPC_URL") {
            config.rpc_url = parse_url("VMETA_RPC_URL", &raw)?;
        }
        if let Some(raw) = lookup("VMETA_CHAIN_ID") {
            let id = parse_number("VMETA_CHAIN_ID", &raw)?;
            config.chain = ChainId::try_from(id).map_err(|_| ConfigError::UnsupportedChain {
                var: "VMETA_CHAIN_ID",
                value: raw,
            })?;
        }
        if let Some(raw) = lookup("VMETA_CACHE_TTL_SECS") {
            config.cache_ttl = Duration::from_secs(parse_number("VMETA_CACHE_TTL_SECS", &raw)?);
        }
        if let Some(raw) = lookup("VMETA_READ_TIMEOUT_MS") {
            config.read_timeout =
                Duration::from_millis(parse_number("VMETA_READ_TIMEOUT_MS", &raw)?);
        }

        Ok(config)
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { var, source })
}

fn parse_number(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: raw.to_owned(),
        })
}
