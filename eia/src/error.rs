use eia_api::EiaApiError;
use thiserror::Error;

/// Errors that can occur when using the EIA client
#[derive(Error, Debug)]
pub enum EiaError {
    /// The route path does not resolve to a known catalog entry
    #[error("unknown route: {path}")]
    RouteNotFound { path: String },

    /// A tool argument was rejected before any network call was made
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: String, reason: String },

    /// Error from the underlying EIA API client
    #[error("EIA API error: {0}")]
    Api(#[from] EiaApiError),

    /// Configuration error, fatal at startup
    #[error("configuration error: {message}")]
    Config { message: String },

    /// File I/O error (catalog cache)
    #[error("file operation failed: {0}")]
    Io(#[from] std::io::Error),
}

impl EiaError {
    /// Create a new route-not-found error
    pub fn route_not_found(path: impl ToString) -> Self {
        Self::RouteNotFound {
            path: path.to_string(),
        }
    }

    /// Create a new invalid-parameter error naming the offending field
    pub fn invalid_parameter<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Type alias for Results using EiaError
pub type Result<T> = std::result::Result<T, EiaError>;
