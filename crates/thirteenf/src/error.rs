//! Error type for a full extraction run.

use thirteenf_edgar::EdgarError;
use thirteenf_output::ExportError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Anything that ends a run early.
#[derive(Debug, Error)]
pub enum Error {
    /// Validation, fetch or extraction failure.
    #[error(transparent)]
    Edgar(#[from] EdgarError),

    /// Artifact could not be written.
    #[error(transparent)]
    Export(#[from] ExportError),
}
