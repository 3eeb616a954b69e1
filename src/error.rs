use std::path::PathBuf;
use thiserror::Error;

/// All failure kinds a run can end with.
///
/// Every kind carries a stable machine code (see [`SantaError::code`]) so
/// `--json` callers can branch on the failure without parsing messages.
#[derive(Error, Debug)]
pub enum SantaError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("unsupported file format: {} (expected .csv)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid input in {}: {message}", path.display())]
    InvalidInput { path: PathBuf, message: String },

    #[error("at least two participants are required (got {count})")]
    InsufficientParticipants { count: usize },

    #[error("unable to generate a valid assignment after {attempts} attempts")]
    UnsatisfiableConstraints { attempts: u32 },

    #[error("failed to write report {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl SantaError {
    pub fn code(&self) -> &'static str {
        match self {
            SantaError::InputNotFound { .. } => "INPUT_NOT_FOUND",
            SantaError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            SantaError::InvalidInput { .. } => "INVALID_INPUT",
            SantaError::InsufficientParticipants { .. } => "INSUFFICIENT_PARTICIPANTS",
            SantaError::UnsatisfiableConstraints { .. } => "UNSATISFIABLE_CONSTRAINTS",
            SantaError::OutputWriteFailure { .. } => "OUTPUT_WRITE_FAILURE",
        }
    }
}
