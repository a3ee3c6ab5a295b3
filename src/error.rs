//! Error types for Agrupar operations.
//!
//! The tokenizer and vectorizer favor silent degradation (empty outputs) over
//! errors, so most variants here surface at the clustering and pipeline
//! boundaries.

use std::fmt;

/// Main error type for Agrupar operations.
///
/// # Examples
///
/// ```
/// use agrupar::error::AgruparError;
///
/// let err = AgruparError::DimensionMismatch {
///     expected: "12".to_string(),
///     actual: "7".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum AgruparError {
    /// Vector/matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// An operation received no data to work on.
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Fetching a document over the network failed. Fatal for the whole
    /// pipeline run: the corpus is processed all-or-nothing.
    Fetch {
        /// The URL that failed
        url: String,
        /// Underlying failure description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AgruparError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgruparError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            AgruparError::EmptyInput { context } => {
                write!(f, "empty input: {context}")
            }
            AgruparError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            AgruparError::Fetch { url, message } => {
                write!(f, "failed to fetch {url}: {message}")
            }
            AgruparError::Io(e) => write!(f, "I/O error: {e}"),
            AgruparError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AgruparError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgruparError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AgruparError {
    fn from(err: std::io::Error) -> Self {
        AgruparError::Io(err)
    }
}

impl From<&str> for AgruparError {
    fn from(msg: &str) -> Self {
        AgruparError::Other(msg.to_string())
    }
}

impl From<String> for AgruparError {
    fn from(msg: String) -> Self {
        AgruparError::Other(msg)
    }
}

impl AgruparError {
    /// Create a dimension mismatch error from two lengths.
    #[must_use]
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AgruparError>;
