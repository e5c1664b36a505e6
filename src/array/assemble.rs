use crate::array::normalize::Indices;
use crate::derive::Deriver;
use crate::types::{ArrayError, Seed};

/// Collect derived values for `positions`, in visitation order.
///
/// The whole run is reserved up front; a run too large to hold in memory
/// fails with [`ArrayError::AllocationFailed`] before anything is derived.
pub fn assemble<D, I>(deriver: &D, seed: &Seed, positions: I) -> Result<Vec<u64>, ArrayError>
where
    D: Deriver + ?Sized,
    I: IntoIterator<Item = u64>,
{
    let positions = positions.into_iter();
    let requested = positions.size_hint().0;

    let mut values: Vec<u64> = Vec::new();
    if values.try_reserve_exact(requested).is_err() {
        tracing::debug!(requested, "cannot reserve derived values");
        return Err(ArrayError::AllocationFailed {
            requested: requested as u64,
        });
    }

    for index in positions {
        values.push(deriver.derive(seed, index));
    }
    Ok(values)
}

/// Lazily derived values over a run of positions. Nothing is computed until
/// the iterator is advanced.
#[derive(Debug, Clone)]
pub struct Values<'a, D> {
    deriver: &'a D,
    seed: &'a Seed,
    indices: Indices,
}

impl<'a, D: Deriver> Values<'a, D> {
    pub(crate) fn new(deriver: &'a D, seed: &'a Seed, indices: Indices) -> Self {
        Self {
            deriver,
            seed,
            indices,
        }
    }
}

impl<D: Deriver> Iterator for Values<'_, D> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let index = self.indices.next()?;
        Some(self.deriver.derive(self.seed, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<D: Deriver> DoubleEndedIterator for Values<'_, D> {
    fn next_back(&mut self) -> Option<u64> {
        let index = self.indices.next_back()?;
        Some(self.deriver.derive(self.seed, index))
    }
}

impl<D: Deriver> ExactSizeIterator for Values<'_, D> {}
