//! API error types.

use axum::http::StatusCode;
use console_admin::AdminError;
use std::time::Duration;
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error enum covering all error cases.
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("Bad request: {0}")]
    BadRequest(String),

    // 404 Not Found
    #[error("{0} not found")]
    NotFound(String),

    // 408 Request Timeout
    #[error("Request did not complete within {0:?}")]
    RequestTimeout(Duration),

    // 500 Internal Server Error
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // 502 Bad Gateway
    #[error("Upstream service error ({status}): {message}")]
    UpstreamError { status: u16, message: String },

    // 503 Service Unavailable
    #[error("Service temporarily unavailable: {0}")]
    ServiceUnavailable(String),

    // 504 Gateway Timeout
    #[error("Admin service did not answer within {0:?}")]
    GatewayTimeout(Duration),
}

impl ApiError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Get error code for client handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::RequestTimeout(_) => "request_timeout",
            Self::Internal(_) => "internal_error",
            Self::UpstreamError { .. } => "upstream_error",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::GatewayTimeout(_) => "gateway_timeout",
        }
    }

    /// Check if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Check if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            AdminError::Upstream { status, message } => ApiError::UpstreamError { status, message },
            AdminError::Unavailable(msg) => ApiError::ServiceUnavailable(msg),
            AdminError::Timeout(after) => ApiError::GatewayTimeout(after),
            err @ AdminError::NotConfigured(_) => ApiError::Internal(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_admin::SiteReplicationOp;

    #[test]
    fn test_admin_error_status_mapping() {
        let cases = [
            (AdminError::invalid("no sites"), StatusCode::BAD_REQUEST),
            (AdminError::upstream(409, "already added"), StatusCode::BAD_GATEWAY),
            (AdminError::Unavailable("refused".into()), StatusCode::SERVICE_UNAVAILABLE),
            (AdminError::Timeout(Duration::from_secs(1)), StatusCode::GATEWAY_TIMEOUT),
            (
                AdminError::NotConfigured(SiteReplicationOp::Add),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (admin_err, status) in cases {
            assert_eq!(ApiError::from(admin_err).status_code(), status);
        }
    }

    #[test]
    fn test_error_classes() {
        assert!(ApiError::BadRequest("x".into()).is_client_error());
        assert!(ApiError::NotFound("Route".into()).is_client_error());
        assert!(ApiError::GatewayTimeout(Duration::from_secs(3)).is_server_error());
        assert!(!ApiError::ServiceUnavailable("down".into()).is_client_error());
    }

    #[test]
    fn test_upstream_message_kept() {
        let err = ApiError::from(AdminError::upstream(400, "site already added"));
        assert_eq!(err.error_code(), "upstream_error");
        assert!(err.to_string().contains("site already added"));
    }
}
