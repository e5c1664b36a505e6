//! Index and slice-bound normalization.
//!
//! Point access is strict: a normalized index outside `[0, length)` is an
//! error. Slicing is tolerant: out-of-range bounds are clamped.
//!
//! All arithmetic is widened to `i128`, so no `i64` input can overflow.

use crate::types::ArrayError;

/// Resolve a possibly-negative index into `[0, length)`.
pub fn normalize_index(index: i64, length: u64) -> Result<u64, ArrayError> {
    let len = length as i128;
    let normalized = if index < 0 {
        index as i128 + len
    } else {
        index as i128
    };

    if (0..len).contains(&normalized) {
        Ok(normalized as u64)
    } else {
        Err(ArrayError::IndexOutOfRange {
            index,
            normalized: narrow(normalized),
            length,
        })
    }
}

/// Resolve a possibly-negative start position into `[0, length]`.
///
/// Unlike [`normalize_index`], `length` itself is accepted: it is the start
/// of an empty run.
pub fn normalize_start(start: i64, length: u64) -> Result<u64, ArrayError> {
    let len = length as i128;
    let normalized = if start < 0 {
        start as i128 + len
    } else {
        start as i128
    };

    if (0..=len).contains(&normalized) {
        Ok(normalized as u64)
    } else {
        Err(ArrayError::IndexOutOfRange {
            index: start,
            normalized: narrow(normalized),
            length,
        })
    }
}

/// Canonical form of a slice: where it starts, how it walks, how many
/// positions it visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceBounds {
    /// First visited position. Only meaningful when `count > 0`; an empty
    /// negative-step slice may report `-1`.
    pub start: i64,
    pub step: i64,
    pub count: u64,
}

impl SliceBounds {
    pub fn indices(&self) -> Indices {
        Indices {
            next: self.start as i128,
            step: self.step as i128,
            remaining: self.count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Half-open, step-aware slice normalization.
///
/// Defaults follow the direction of `step`: for a positive step the slice
/// runs `0..length`, for a negative step it runs from `length - 1` down to
/// the front. Negative bounds count from the end and are then clamped into
/// `[0, length]` (positive step) or `[-1, length - 1]` (negative step).
pub fn normalize_slice(
    length: u64,
    start: Option<i64>,
    stop: Option<i64>,
    step: i64,
) -> Result<SliceBounds, ArrayError> {
    if step == 0 {
        return Err(ArrayError::InvalidStep(step));
    }

    let len = length as i128;
    let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

    let clamp = |bound: i64| -> i128 {
        let mut b = bound as i128;
        if b < 0 {
            b += len;
            if b < lower {
                b = lower;
            }
        } else if b >= upper {
            b = upper;
        }
        b
    };

    let (default_start, default_stop) = if step > 0 { (lower, upper) } else { (upper, lower) };
    let start = start.map(clamp).unwrap_or(default_start);
    let stop = stop.map(clamp).unwrap_or(default_stop);

    let step_wide = step as i128;
    let count = if step > 0 {
        if stop > start {
            (stop - start + step_wide - 1) / step_wide
        } else {
            0
        }
    } else if start > stop {
        (start - stop - step_wide - 1) / -step_wide
    } else {
        0
    };

    debug_assert!(count >= 0 && count <= len);

    Ok(SliceBounds {
        start: narrow(start),
        step,
        count: count as u64,
    })
}

/// Arithmetic progression of positions, front to back.
#[derive(Debug, Clone)]
pub struct Indices {
    next: i128,
    step: i128,
    remaining: u64,
}

impl Indices {
    /// `count` positions from `start`, `stride` apart.
    pub fn strided(start: u64, stride: u64, count: u64) -> Self {
        Indices {
            next: start as i128,
            step: stride as i128,
            remaining: count,
        }
    }
}

impl Iterator for Indices {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.next += self.step;
        self.remaining -= 1;
        Some(current as u64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(self.remaining).ok())
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.next + self.step * self.remaining as i128) as u64)
    }
}

impl ExactSizeIterator for Indices {}

fn narrow(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
