//! Error types for scaling operations.

use std::fmt;

/// Error type for scaling operations.
#[derive(Debug)]
pub enum ScalerError {
    /// Empty data provided where non-empty was required.
    EmptyData(String),
    /// Feature dimension mismatch between fit and transform input.
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// Shape mismatch when slicing or rebuilding an array.
    InvalidShape(String),
    /// Invalid hyperparameter value.
    InvalidParameter(String),
    /// Serialization or deserialization error.
    SerializationError(String),
    /// I/O error during file operations.
    IoError(String),
}

impl fmt::Display for ScalerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalerError::EmptyData(msg) => {
                write!(f, "Empty data: {}", msg)
            }
            ScalerError::FeatureMismatch {
                expected_features,
                got_features,
            } => {
                write!(
                    f,
                    "Feature mismatch: expected {} features, got {}",
                    expected_features, got_features
                )
            }
            ScalerError::InvalidShape(msg) => {
                write!(f, "Invalid shape: {}", msg)
            }
            ScalerError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            ScalerError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            ScalerError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ScalerError {}

impl From<std::io::Error> for ScalerError {
    fn from(err: std::io::Error) -> Self {
        ScalerError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for ScalerError {
    fn from(err: bincode::Error) -> Self {
        ScalerError::SerializationError(err.to_string())
    }
}

impl From<ndarray::ShapeError> for ScalerError {
    fn from(err: ndarray::ShapeError) -> Self {
        ScalerError::InvalidShape(err.to_string())
    }
}
