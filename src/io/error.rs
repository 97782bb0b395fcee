//! Error types for mosaic generation and its I/O collaborators

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
///
/// Every variant is terminal: nothing in the crate retries or recovers, the
/// failure is reported once and the run stops.
#[derive(Debug)]
pub enum MosaicError {
    /// Command-line arguments could not be parsed
    Argument {
        /// Parser message describing the problem
        reason: String,
    },

    /// Tile size below the minimum or outside the representable range
    InvalidTileSize {
        /// Value that was supplied
        value: i64,
    },

    /// Source image has a zero-length side
    InvalidDimensions {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
    },

    /// Input is neither an existing local file nor a fetchable URL
    SourceNotFound {
        /// Input string as given by the caller
        locator: String,
        /// What went wrong while resolving or fetching it
        reason: String,
    },

    /// Input bytes are not a supported, valid image
    Decode {
        /// Input string as given by the caller
        locator: String,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Failure inside the compositing algorithm
    MosaicBuild {
        /// Step that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Finished mosaic could not be encoded or written
    EncodeWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying encoding or I/O error
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

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument { reason } => write!(f, "Invalid arguments: {reason}"),
            Self::InvalidTileSize { value } => {
                write!(
                    f,
                    "Invalid tile size {value} (minimum {})",
                    crate::io::configuration::MIN_TILE_SIZE
                )
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid source dimensions {width}x{height}")
            }
            Self::SourceNotFound { locator, reason } => {
                write!(f, "File does not exist '{locator}': {reason}")
            }
            Self::Decode { locator, source } => {
                write!(f, "Invalid image '{locator}': {source}")
            }
            Self::MosaicBuild { operation, reason } => {
                write!(f, "Failed to create mosaic during {operation}: {reason}")
            }
            Self::EncodeWrite { path, source } => {
                write!(
                    f,
                    "Failed to write mosaic to '{}': {source}",
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

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::EncodeWrite { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Folds foreign failures into [`MosaicError::MosaicBuild`]
pub trait WithOperation<T> {
    /// Tag a failure with the algorithm step it happened in
    ///
    /// # Errors
    ///
    /// Propagates the original error as a `MosaicBuild` error for `operation`
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithOperation<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| build_error(operation, &e))
    }
}

impl From<clap::Error> for MosaicError {
    fn from(err: clap::Error) -> Self {
        Self::Argument {
            reason: err
                .to_string()
                .trim_start_matches("error: ")
                .trim_end()
                .to_string(),
        }
    }
}

/// Create a mosaic build error
pub fn build_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::MosaicBuild {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a source-not-found error
pub fn source_not_found(locator: &str, reason: &impl ToString) -> MosaicError {
    MosaicError::SourceNotFound {
        locator: locator.to_string(),
        reason: reason.to_string(),
    }
}
