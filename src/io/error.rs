//! Error types for tiling, verification and export

use crate::spatial::board::Position;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// A caller-supplied argument failed validation
    ///
    /// This is the only error `solve` produces. It is raised before the
    /// board is allocated, so no partial grid is ever observable.
    InvalidArgument {
        /// Name of the invalid argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A finished board or step log violates a tiling law
    InconsistentTiling {
        /// Cell where the violation was detected, when one cell is to blame
        position: Option<Position>,
        /// Description of the violated law
        reason: String,
    },

    /// Failed to save a board image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::InconsistentTiling {
                position: Some(position),
                reason,
            } => {
                write!(f, "Inconsistent tiling at {position}: {reason}")
            }
            Self::InconsistentTiling {
                position: None,
                reason,
            } => {
                write!(f, "Inconsistent tiling: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidArgument { .. } | Self::InconsistentTiling { .. } => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an inconsistent tiling error
pub fn inconsistent(position: Option<Position>, reason: &impl ToString) -> TilingError {
    TilingError::InconsistentTiling {
        position,
        reason: reason.to_string(),
    }
}
