pub mod config;
pub mod descriptor;

pub use config::DerivationConfig;
pub use descriptor::{ArrayManifest, ManifestError};
