pub mod clients;
pub mod error;
pub mod traits;

pub use clients::{LensClient, MetaClient};
pub use error::RegistryError;
pub use traits::{MetadataRegistry, VaultRegistry};
