pub mod hashing;

pub use hashing::{derive, Deriver, Sha256Deriver, VALUE_SEPARATOR, VALUE_WIDTH};
