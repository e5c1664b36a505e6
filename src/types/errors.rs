use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("Invalid length: {0} (must be non-negative)")]
    InvalidLength(i64),

    /// `index` is what the caller passed, `normalized` is after the
    /// negative-index rule was applied.
    #[error("Index {index} out of range for length {length} (normalized to {normalized})")]
    IndexOutOfRange {
        index: i64,
        normalized: i64,
        length: u64,
    },

    #[error("Invalid step: {0}")]
    InvalidStep(i64),

    #[error("Invalid count: {0} (must be non-negative)")]
    InvalidCount(i64),

    #[error("Cannot allocate {requested} derived values")]
    AllocationFailed { requested: u64 },
}
