pub mod modes;

pub use modes::{sample_values, SampleMode, SCATTER_SCOPE};
