use thiserror::Error;

/// Failure talking to the remote service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// 401: missing or expired session; the caller should send the user to sign-in.
    #[error("unauthorized: session is missing or expired")]
    Unauthorized,
    /// Any other non-2xx response.
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
    /// The request could not be built (e.g. bad attachment content type).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Api(status, _) => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_reported_for_http_failures_only() {
        assert_eq!(ApiError::Api(500, "boom".into()).status(), Some(500));
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Network("refused".into()).status(), None);
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::Api(409, "product changed concurrently".into());
        assert_eq!(err.to_string(), "API error (409): product changed concurrently");
    }
}
