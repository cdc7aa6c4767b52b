use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Invalid value for `{field}`: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Search provider unreachable: {0}")]
    Network(String),

    #[error("Search provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Search provider returned status {status}")]
    Upstream { status: u16 },

    #[error("Failed to parse provider response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Place services not initialized")]
    NotInitialized,
}

impl PlacesError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        PlacesError::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Whether repeating the same request could succeed. Nothing retries
    /// today; callers use this to report the failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            PlacesError::Network(_) | PlacesError::Timeout(_) => true,
            PlacesError::Upstream { status } => *status == 429 || *status >= 500,
            PlacesError::InvalidInput { .. }
            | PlacesError::Parse(_)
            | PlacesError::Config(_)
            | PlacesError::NotInitialized => false,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, PlacesError::InvalidInput { .. })
    }
}

#[cfg(feature = "ssr")]
impl PlacesError {
    /// Classifies a reqwest failure. `deadline` is the timeout the client was
    /// built with, reported back when it fires. A request that cannot even be
    /// built points at a bad provider URL.
    pub fn from_reqwest(err: reqwest::Error, deadline: Duration) -> Self {
        if err.is_builder() {
            PlacesError::Config(err.to_string())
        } else if err.is_timeout() {
            PlacesError::Timeout(deadline)
        } else if err.is_decode() {
            PlacesError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            PlacesError::Upstream {
                status: status.as_u16(),
            }
        } else {
            PlacesError::Network(err.to_string())
        }
    }
}

#[cfg(feature = "ssr")]
impl axum::response::IntoResponse for PlacesError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use shared_types::ErrorResponse;

        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            axum::Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
