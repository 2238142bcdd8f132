//! Error types for xorshift-mwc

use thiserror::Error;

/// Result type alias using xorshift-mwc's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a generator or requesting samples
///
/// Both kinds are programmer errors detected before any state is built or
/// any buffer is allocated. Stepping itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Generator parameters violate the multiply-with-carry constraints
    #[error("Invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// The parameter name
        param: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = Error::invalid_parameter("a", "a must be greater than c");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'a': a must be greater than c"
        );
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid_argument("length", "must be non-negative, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'length': must be non-negative, got -1"
        );
    }
}
