use serde::{Deserialize, Serialize};

use crate::derive::{Deriver, VALUE_SEPARATOR, VALUE_WIDTH};

// Key point:
// Serializable
// Comparable
// Frozen defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationConfig {
    pub version: String,
    pub hash_algorithm: String,
    pub separator: String,
    pub value_width: usize,
}

impl DerivationConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
            separator: VALUE_SEPARATOR.into(),
            value_width: VALUE_WIDTH,
        }
    }

    /// v0 layout, labelled with the deriver's algorithm.
    pub fn for_deriver<D: Deriver + ?Sized>(deriver: &D) -> Self {
        Self {
            hash_algorithm: deriver.algorithm().into(),
            ..Self::v0()
        }
    }

    /// Only the frozen v0 scheme can be reproduced from a descriptor.
    pub fn is_supported(&self) -> bool {
        *self == Self::v0()
    }
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self::v0()
    }
}
