use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Mixed types: {0}")]
    MixedTypes(String),

    #[error(
        "The number of placeholders in the template is {placeholders}, \
         which does not match the number of column names ({columns})"
    )]
    PlaceholderMismatch { placeholders: usize, columns: usize },

    #[error("Invalid value for `{option}`: '{value}' (expected one of {allowed})")]
    InvalidOption {
        option: &'static str,
        value: String,
        allowed: String,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand used by the builders for precondition failures.
    pub(crate) fn invalid<T: Into<String>>(msg: T) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// True for every construction-time argument failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_)
                | Error::MixedTypes(_)
                | Error::PlaceholderMismatch { .. }
                | Error::InvalidOption { .. }
        )
    }
}
