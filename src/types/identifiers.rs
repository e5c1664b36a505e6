use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::manifest::DerivationConfig;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: &str = "default-seed";

/// The string that, together with an index, determines an element's value.
///
/// Any string is accepted, including the empty one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    pub fn new(seed: impl Into<String>) -> Self {
        Seed(seed.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// A seed in a separate namespace, so values drawn from it never line up
    /// with the parent's element values.
    pub fn scoped(&self, scope: &str) -> Seed {
        Seed(format!("{}|{}", self.0, scope))
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed(DEFAULT_SEED.to_string())
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash identifying an array descriptor.
///
/// Two arrays with equal fingerprints produce the same value at every index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayFingerprint(String);

impl ArrayFingerprint {
    pub fn compute(
        config: &DerivationConfig,
        length: u64,
        seed: &Seed,
    ) -> Result<Self, serde_json::Error> {
        let mut hasher = Sha256::new();

        let config_json = serde_json::to_vec(config)?;
        hasher.update(&config_json);
        hasher.update(length.to_string().as_bytes());
        hasher.update(b"|");
        hasher.update(seed.as_bytes());

        let hex = hex::encode(hasher.finalize());

        Ok(ArrayFingerprint(format!("sha256:{hex}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArrayFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
