//! Deterministic virtual arrays.
//!
//! `virtual-array` provides a sequence abstraction that behaves like a huge
//! array of integers (length queries, negative indexing, step-aware slicing,
//! sampling) without ever storing its elements. The value at index `i` is
//! derived on demand from a seed and `i` through SHA-256, so the same
//! `(length, seed)` pair reproduces the same sequence, byte-for-byte, with no
//! storage proportional to length.
//!
//! ```
//! use virtual_array::VirtualLargeArray;
//!
//! let v = VirtualLargeArray::new(10, "example").unwrap();
//! assert_eq!(v.get(-1).unwrap(), v.get(9).unwrap());
//! assert_eq!(v.slice(Some(2), Some(5), 1).unwrap().len(), 3);
//! ```

pub mod array;
pub mod derive;
pub mod manifest;
pub mod sampling;
pub mod types;

pub use array::VirtualLargeArray;
pub use derive::{derive, Deriver, Sha256Deriver};
pub use manifest::{ArrayManifest, DerivationConfig, ManifestError};
pub use sampling::SampleMode;
pub use types::{ArrayError, ArrayFingerprint, Seed, DEFAULT_SEED};
