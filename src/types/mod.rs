pub mod errors;
pub mod identifiers;

pub use errors::ArrayError;
pub use identifiers::{ArrayFingerprint, Seed, DEFAULT_SEED};
