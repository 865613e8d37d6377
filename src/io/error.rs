//! Error types for grid evolution and its file front ends

use std::fmt;
use std::path::PathBuf;

use crate::spatial::tiles::TileKind;

/// Which dimension of a paint mask disagreed with the requested grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeAxis {
    /// The number of rows differs from the requested height
    Height,
    /// A row's length differs from the requested width
    Width {
        /// Index of the first offending row
        row: usize,
    },
}

/// Main error type for all generation operations
#[derive(Debug)]
pub enum EvolveError {
    /// Paint mask dimensions disagree with the requested width and height
    ///
    /// Raised before any grid is allocated or any random draw is made.
    ShapeMismatch {
        /// Dimension that disagreed
        axis: ShapeAxis,
        /// Requested size along that dimension
        expected: usize,
        /// Size found in the paint mask
        actual: usize,
    },

    /// A painted kind is not part of the active kind set
    UnsupportedKind {
        /// The rejected kind
        kind: TileKind,
        /// Column of the painted cell
        x: usize,
        /// Row of the painted cell
        y: usize,
    },

    /// A wire code is neither a tile code nor the unset sentinel
    InvalidTileCode {
        /// The rejected code
        code: i32,
        /// Column of the cell
        x: usize,
        /// Row of the cell
        y: usize,
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

    /// Failed to load an image from disk
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or save an image
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

    /// JSON encoding or decoding failed
    Serialization {
        /// What was being read or written
        context: String,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl EvolveError {
    /// Whether the error was caused by malformed caller input rather than the environment
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ShapeMismatch { .. }
                | Self::UnsupportedKind { .. }
                | Self::InvalidTileCode { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl fmt::Display for EvolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                axis: ShapeAxis::Height,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Paint mask has {actual} rows but the requested height is {expected}"
                )
            }
            Self::ShapeMismatch {
                axis: ShapeAxis::Width { row },
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Paint mask row {row} has {actual} cells but the requested width is {expected}"
                )
            }
            Self::UnsupportedKind { kind, x, y } => {
                write!(
                    f,
                    "Painted {kind} at ({x}, {y}) is not part of the active tile set"
                )
            }
            Self::InvalidTileCode { code, x, y } => {
                write!(f, "Invalid tile code {code} at ({x}, {y})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::Serialization { context, source } => {
                write!(f, "JSON error in {context}: {source}")
            }
        }
    }
}

impl std::error::Error for EvolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, EvolveError>;

impl From<std::io::Error> for EvolveError {
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
) -> EvolveError {
    EvolveError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> EvolveError {
    EvolveError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

