//! Error types for maze generation, layout emission and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Generation or layout parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Internal bookkeeping broke an invariant of the generated maze
    ///
    /// Never caused by bad input. Occurs only when:
    /// - The backtracking stack empties before every cell is visited
    /// - A path flag lacks its reciprocal flag on the neighbouring cell
    /// - The visited tally disagrees with the grid contents
    InvariantViolation {
        /// Operation that detected the violation
        operation: &'static str,
        /// Description of the violation
        reason: String,
    },

    /// The caller-supplied randomness source failed to produce a value
    RandomSource {
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a rendered image to disk
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

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Invariant violated during {operation}: {reason}")
            }
            Self::RandomSource { reason } => {
                write!(f, "Randomness source failed: {reason}")
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

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl MazeError {
    /// Whether the error indicates a defect in the generator rather than bad input
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> MazeError {
    MazeError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a randomness source failure
pub fn random_source_failure(reason: &impl ToString) -> MazeError {
    MazeError::RandomSource {
        reason: reason.to_string(),
    }
}
