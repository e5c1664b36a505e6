use serde::{Deserialize, Serialize};

use crate::array::assemble::assemble;
use crate::array::normalize::{normalize_start, Indices};
use crate::derive::Deriver;
use crate::types::{ArrayError, Seed};

/// How sample positions are chosen. Every mode is reproducible from
/// `(seed, length, count, start)` alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SampleMode {
    /// `count` contiguous positions from `start`. Same as a step-1 slice.
    #[default]
    Sequential,
    /// `count` positions from `start`, `stride` apart.
    Strided { stride: i64 },
    /// Position `j` is `derive(seed|sample, start + j) mod length`.
    /// Positions may repeat.
    Scattered,
}

/// Namespace for the hash stream that picks scattered positions.
pub const SCATTER_SCOPE: &str = "sample";

/// Derive `count` values chosen by `mode`.
///
/// Runs that would reach past the end fail with
/// [`ArrayError::IndexOutOfRange`], carrying the first offending position.
/// Nothing is clamped and nothing is wrapped.
pub fn sample_values<D>(
    deriver: &D,
    seed: &Seed,
    length: u64,
    count: i64,
    start: i64,
    mode: SampleMode,
) -> Result<Vec<u64>, ArrayError>
where
    D: Deriver + ?Sized,
{
    if count < 0 {
        return Err(ArrayError::InvalidCount(count));
    }
    let count = count as u64;
    let first = normalize_start(start, length)?;

    match mode {
        SampleMode::Sequential => {
            check_span(first, 1, count, length)?;
            assemble(deriver, seed, Indices::strided(first, 1, count))
        }
        SampleMode::Strided { stride } => {
            if stride < 1 {
                return Err(ArrayError::InvalidStep(stride));
            }
            let stride = stride as u64;
            check_span(first, stride, count, length)?;
            assemble(deriver, seed, Indices::strided(first, stride, count))
        }
        SampleMode::Scattered => {
            if count == 0 {
                return Ok(Vec::new());
            }
            if length == 0 {
                return Err(ArrayError::IndexOutOfRange {
                    index: start,
                    normalized: first as i64,
                    length,
                });
            }
            let scatter = seed.scoped(SCATTER_SCOPE);
            let positions = (0..count).map(|j| deriver.derive(&scatter, first + j) % length);
            assemble(deriver, seed, positions)
        }
    }
}

fn check_span(first: u64, stride: u64, count: u64, length: u64) -> Result<(), ArrayError> {
    if count == 0 {
        return Ok(());
    }

    let first = first as i128;
    let stride = stride as i128;
    let len = length as i128;
    let last = first + stride * (count as i128 - 1);
    if last < len {
        return Ok(());
    }

    // Smallest k with first + k * stride >= length.
    let k = (len - first + stride - 1).max(0) / stride;
    let offending = first + k * stride;
    let offending = offending.min(i64::MAX as i128) as i64;

    tracing::trace!(offending, length, "sample run reaches past the end");

    Err(ArrayError::IndexOutOfRange {
        index: offending,
        normalized: offending,
        length,
    })
}
