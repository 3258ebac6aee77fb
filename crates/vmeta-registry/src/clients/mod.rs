mod lens;
mod meta;

pub use lens::LensClient;
pub use meta::MetaClient;
