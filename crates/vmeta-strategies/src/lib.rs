pub mod config;
pub mod error;
pub mod service;

pub use config::{Config, ConfigError};
pub use error::StrategiesError;
pub use service::StrategyService;
