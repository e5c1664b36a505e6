pub mod assemble;
pub mod normalize;
pub mod virtual_array;

pub use assemble::{assemble, Values};
pub use normalize::{normalize_index, normalize_slice, normalize_start, Indices, SliceBounds};
pub use virtual_array::VirtualLargeArray;
