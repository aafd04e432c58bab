//! Error types for mt-output.

use thiserror::Error;

/// Errors that can occur when exporting trajectories.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("refusing to export an empty trajectory set")]
    EmptyInput,

    #[error("failed to render trace: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
