//! Exit codes and error classification.

use hypertree_core::HyperError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    /// Command completed.
    Success = 0,
    /// Failure not caused by the arguments (I/O, serialization).
    Error = 1,
    /// Settings, node id or point rejected.
    InvalidInput = 2,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// Maps a core error to the exit code reported for it.
pub fn exit_code_for_error(err: &HyperError) -> CliExitCode {
    match err {
        HyperError::InvalidConfig(_)
        | HyperError::InvalidOrientation(_)
        | HyperError::Config(_)
        | HyperError::PointOutsideDisk { .. }
        | HyperError::NodeNotFound(_)
        | HyperError::InvalidMount { .. } => CliExitCode::InvalidInput,
        HyperError::Serialization(_) | HyperError::Io(_) => CliExitCode::Error,
    }
}
