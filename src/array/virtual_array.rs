// Read-only by construction:
// no stored elements
// no mutation methods
// every read is a pure function of (length, seed)

use crate::array::assemble::{assemble, Values};
use crate::array::normalize::{normalize_index, normalize_slice, Indices};
use crate::derive::{Deriver, Sha256Deriver};
use crate::manifest::{DerivationConfig, ManifestError};
use crate::sampling::{sample_values, SampleMode};
use crate::types::{ArrayError, ArrayFingerprint, Seed};

/// A huge ordered sequence of integers that is never materialized.
///
/// The element at index `i` is `derive(seed, i)`. Two arrays built from the
/// same `(length, seed)` are indistinguishable.
#[derive(Debug, Clone)]
pub struct VirtualLargeArray<D = Sha256Deriver> {
    length: u64,
    seed: Seed,
    deriver: D,
}

impl VirtualLargeArray<Sha256Deriver> {
    /// Create an array of `length` elements derived from `seed`.
    ///
    /// Fails with [`ArrayError::InvalidLength`] when `length` is negative.
    pub fn new(length: i64, seed: impl Into<Seed>) -> Result<Self, ArrayError> {
        Self::with_deriver(length, seed, Sha256Deriver)
    }

    pub fn with_default_seed(length: i64) -> Result<Self, ArrayError> {
        Self::new(length, Seed::default())
    }
}

impl<D: Deriver> VirtualLargeArray<D> {
    pub fn with_deriver(length: i64, seed: impl Into<Seed>, deriver: D) -> Result<Self, ArrayError> {
        if length < 0 {
            return Err(ArrayError::InvalidLength(length));
        }
        let seed = seed.into();

        tracing::debug!(
            length,
            seed = %seed,
            algorithm = deriver.algorithm(),
            "virtual array created"
        );

        Ok(Self {
            length: length as u64,
            seed,
            deriver,
        })
    }

    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn deriver(&self) -> &D {
        &self.deriver
    }

    /// Element at `index`. Negative indices count from the end, so `-1` is
    /// the last element.
    pub fn get(&self, index: i64) -> Result<u64, ArrayError> {
        let index = normalize_index(index, self.length)?;
        Ok(self.deriver.derive(&self.seed, index))
    }

    /// Freshly assembled values for `start..stop` walked by `step`.
    ///
    /// `None` bounds take the defaults for the direction of `step`.
    /// Out-of-range bounds are clamped. Fails on `step == 0`, or when the
    /// run is too large to assemble in memory.
    pub fn slice(
        &self,
        start: Option<i64>,
        stop: Option<i64>,
        step: i64,
    ) -> Result<Vec<u64>, ArrayError> {
        let bounds = normalize_slice(self.length, start, stop, step)?;
        let values = assemble(&self.deriver, &self.seed, bounds.indices())?;
        debug_assert_eq!(values.len() as u64, bounds.count);
        Ok(values)
    }

    /// Lazy counterpart of [`slice`](Self::slice).
    pub fn iter_slice(
        &self,
        start: Option<i64>,
        stop: Option<i64>,
        step: i64,
    ) -> Result<Values<'_, D>, ArrayError> {
        let bounds = normalize_slice(self.length, start, stop, step)?;
        Ok(Values::new(&self.deriver, &self.seed, bounds.indices()))
    }

    /// Every element, front to back, derived lazily.
    pub fn iter(&self) -> Values<'_, D> {
        Values::new(
            &self.deriver,
            &self.seed,
            Indices::strided(0, 1, self.length),
        )
    }

    /// `count` contiguous values from `start`.
    ///
    /// Equivalent to `slice(start, start + count, 1)` when the run fits.
    /// A run reaching past the end is an [`ArrayError::IndexOutOfRange`].
    pub fn sample(&self, count: i64, start: i64) -> Result<Vec<u64>, ArrayError> {
        self.sample_with(count, start, SampleMode::Sequential)
    }

    pub fn sample_with(
        &self,
        count: i64,
        start: i64,
        mode: SampleMode,
    ) -> Result<Vec<u64>, ArrayError> {
        sample_values(&self.deriver, &self.seed, self.length, count, start, mode)
    }

    /// Stable identity of `(config, length, seed)`.
    pub fn fingerprint(&self) -> Result<ArrayFingerprint, ManifestError> {
        let config = DerivationConfig::for_deriver(&self.deriver);
        Ok(ArrayFingerprint::compute(&config, self.length, &self.seed)?)
    }
}

// Derivers are compared by value, so parameterized schemes with different
// parameters are never equal.
impl<D: Deriver + PartialEq> PartialEq for VirtualLargeArray<D> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.seed == other.seed && self.deriver == other.deriver
    }
}

impl<D: Deriver + Eq> Eq for VirtualLargeArray<D> {}
