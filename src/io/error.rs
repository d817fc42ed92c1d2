//! Error types and context management for reassembly operations

use crate::algorithm::working_set::StripId;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all reassembly operations
#[derive(Debug)]
pub enum ReassemblyError {
    /// Source image could not be opened or decoded
    ImageDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Two compared columns have different pixel heights
    MismatchedHeight {
        /// Height of the column placed on the left
        left_height: usize,
        /// Height of the column placed on the right
        right_height: usize,
    },

    /// Assembly aborted while scoring or merging a pair of strips
    Assembly {
        /// Round in which the failure occurred (1-based)
        round: usize,
        /// Strip selected as the current strip of the round
        current: StripId,
        /// Candidate strip that could not be matched against it
        candidate: StripId,
        /// Underlying failure
        source: Box<ReassemblyError>,
    },

    /// No strips were supplied
    EmptyInput,

    /// Source directory does not exist or is not a directory
    DirectoryNotFound {
        /// Path that was expected to be a directory
        path: PathBuf,
    },

    /// Source data doesn't meet the strip model requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode an image for export
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

impl fmt::Display for ReassemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::MismatchedHeight {
                left_height,
                right_height,
            } => {
                write!(
                    f,
                    "Column heights differ: left is {left_height} pixels, right is {right_height} pixels"
                )
            }
            Self::Assembly {
                round,
                current,
                candidate,
                source,
            } => {
                write!(
                    f,
                    "Assembly failed in round {round} matching strip {current} against strip {candidate}: {source}"
                )
            }
            Self::EmptyInput => write!(f, "No strips to assemble"),
            Self::DirectoryNotFound { path } => {
                write!(f, "Source directory '{}' not found", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for ReassemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Assembly { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl ReassemblyError {
    /// Innermost cause, skipping assembly wrappers
    pub fn root(&self) -> &Self {
        match self {
            Self::Assembly { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether this error, or the failure it wraps, is a height mismatch
    pub fn is_mismatched_height(&self) -> bool {
        matches!(self.root(), Self::MismatchedHeight { .. })
    }
}

/// Convenience type alias for reassembly results
pub type Result<T> = std::result::Result<T, ReassemblyError>;

/// Assembly state attached to failures raised while matching strips
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorContext {
    /// Current assembly round
    pub round: Option<usize>,
    /// Pair being matched (current, candidate)
    pub pair: Option<(StripId, StripId)>,
}

/// Enriches errors with assembly state
pub trait WithContext<T> {
    /// Add assembly context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error, wrapped in
    /// [`ReassemblyError::Assembly`] when both a round and a pair are known
    fn with_context(self, context: ErrorContext) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<ReassemblyError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let error = e.into();
            // Already wrapped errors keep the pair that first failed
            if matches!(error, ReassemblyError::Assembly { .. }) {
                return error;
            }
            match (context.round, context.pair) {
                (Some(round), Some((current, candidate))) => ReassemblyError::Assembly {
                    round,
                    current,
                    candidate,
                    source: Box::new(error),
                },
                _ => error,
            }
        })
    }
}

impl From<std::io::Error> for ReassemblyError {
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
) -> ReassemblyError {
    ReassemblyError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> ReassemblyError {
    ReassemblyError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
