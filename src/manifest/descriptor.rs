use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::array::VirtualLargeArray;
use crate::derive::Deriver;
use crate::manifest::config::DerivationConfig;
use crate::types::{ArrayError, ArrayFingerprint, Seed};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output path already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Unsupported derivation config: version {version}, algorithm {hash_algorithm}")]
    UnsupportedConfig {
        version: String,
        hash_algorithm: String,
    },
    #[error("Fingerprint mismatch: manifest says {recorded}, descriptor hashes to {computed}")]
    FingerprintMismatch {
        recorded: ArrayFingerprint,
        computed: ArrayFingerprint,
    },
    #[error("Length {0} exceeds the addressable range")]
    LengthTooLarge(u64),
    #[error("Array error: {0}")]
    Array(#[from] ArrayError),
}

/// Everything needed to reproduce an array, and nothing derived from it.
///
/// Values are never persisted; only this descriptor is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayManifest {
    pub fingerprint: ArrayFingerprint,
    pub config: DerivationConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub length: u64,
    pub seed: Seed,
}

impl ArrayManifest {
    pub fn describe<D: Deriver>(array: &VirtualLargeArray<D>) -> Result<Self, ManifestError> {
        let config = DerivationConfig::for_deriver(array.deriver());
        let fingerprint = ArrayFingerprint::compute(&config, array.len(), array.seed())?;

        Ok(Self {
            fingerprint,
            config,
            created_at: Utc::now(),
            length: array.len(),
            seed: array.seed().clone(),
        })
    }

    /// Check that the descriptor is one this crate can reproduce and that
    /// its fingerprint matches its contents.
    pub fn verify(&self) -> Result<(), ManifestError> {
        if !self.config.is_supported() {
            return Err(ManifestError::UnsupportedConfig {
                version: self.config.version.clone(),
                hash_algorithm: self.config.hash_algorithm.clone(),
            });
        }

        let computed = ArrayFingerprint::compute(&self.config, self.length, &self.seed)?;
        if computed != self.fingerprint {
            return Err(ManifestError::FingerprintMismatch {
                recorded: self.fingerprint.clone(),
                computed,
            });
        }

        Ok(())
    }

    /// Rebuild the array this manifest describes.
    pub fn into_array(self) -> Result<VirtualLargeArray, ManifestError> {
        self.verify()?;

        let length =
            i64::try_from(self.length).map_err(|_| ManifestError::LengthTooLarge(self.length))?;

        Ok(VirtualLargeArray::new(length, self.seed)?)
    }

    /// Write the manifest as pretty JSON.
    ///
    /// Refuses to overwrite. The file is written next to `path` under a
    /// temporary name and renamed into place.
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        if path.exists() {
            return Err(ManifestError::OutputExists(path.to_path_buf()));
        }

        // sha256:<hex>, use the first 12 hex chars
        let stem = self
            .fingerprint
            .as_str()
            .get(7..19)
            .unwrap_or("manifest");
        let temp_path = path.with_extension(format!("tmp.{stem}"));

        if temp_path.exists() {
            fs::remove_file(&temp_path)?;
        }

        let f = fs::File::create(&temp_path)?;
        serde_json::to_writer_pretty(&f, self)?;
        f.sync_all()?;

        fs::rename(&temp_path, path)?;

        tracing::debug!(
            path = %path.display(),
            fingerprint = %self.fingerprint,
            "array manifest written"
        );

        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        let f = fs::File::open(path)?;
        let manifest: ArrayManifest = serde_json::from_reader(f)?;

        tracing::debug!(
            path = %path.display(),
            fingerprint = %manifest.fingerprint,
            length = manifest.length,
            "array manifest read"
        );

        Ok(manifest)
    }
}
