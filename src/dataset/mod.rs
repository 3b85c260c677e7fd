//! Dataset loading and validation
//!
//! The dataset is read once from a single JSON file at process start.
//! A load that fails validation is fatal: the process must not serve
//! from a dataset it could not fully verify.

mod errors;
mod loader;

pub use errors::{DatasetError, DatasetErrorCode, DatasetResult};
pub use loader::{load_dataset, validate, Dataset, DatasetSummary, IntegrityReport};
