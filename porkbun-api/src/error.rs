use serde::Serialize;
use thiserror::Error;

/// Boxed transport failure kept as the source of a [`PorkbunError::NetworkError`].
pub type TransportCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for every Porkbun client operation.
///
/// The variants are listed in classification order: a failure is reported as the
/// first variant that applies and is never reclassified as a later one.
///
/// All variants serialize with a `code` tag for structured error reporting.
/// Credentials never appear in any variant.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "code")]
pub enum PorkbunError {
    /// An input failed a local syntactic rule. No request was sent.
    #[error("Invalid {field}: {reason}")]
    ValidationError {
        /// Name of the offending field (e.g. `"domain"`, `"ips"`).
        field: String,
        /// The rejected value.
        value: serde_json::Value,
        /// Human-readable rejection reason.
        reason: String,
    },

    /// The request could not be completed (DNS resolution, connection, TLS, timeout).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
        /// Underlying transport error, exposed through [`std::error::Error::source`].
        #[serde(skip)]
        #[source]
        cause: Option<TransportCause>,
    },

    /// The API answered with a non-success HTTP status.
    #[error("HTTP {status_code} {status_text}")]
    HttpError {
        /// Numeric HTTP status.
        status_code: u16,
        /// Canonical reason phrase for the status, empty if unknown.
        status_text: String,
        /// Raw response body.
        body: String,
    },

    /// The response body is not JSON or lacks the mandatory envelope.
    #[error("Malformed response: {detail}")]
    ResponseFormatError {
        /// Details about the shape violation.
        detail: String,
        /// Raw response body.
        body: String,
    },

    /// A well-formed envelope whose `status` is not `SUCCESS`.
    #[error("API error: {}", .message.as_deref().unwrap_or("Unknown error"))]
    ApiError {
        /// Reported status string (usually `"ERROR"`).
        status: String,
        /// Reported message, if any.
        message: Option<String>,
    },
}

impl PorkbunError {
    /// 是否为预期行为（输入错误、业务拒绝），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::ValidationError { .. } | Self::ApiError { .. })
    }

    /// Builds a [`NetworkError`](Self::NetworkError) from a transport error.
    pub(crate) fn network(detail: impl Into<String>, cause: impl Into<TransportCause>) -> Self {
        Self::NetworkError {
            detail: detail.into(),
            cause: Some(cause.into()),
        }
    }

    /// Builds a [`ResponseFormatError`](Self::ResponseFormatError).
    pub(crate) fn response_format(detail: impl ToString, body: &str) -> Self {
        Self::ResponseFormatError {
            detail: detail.to_string(),
            body: body.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, PorkbunError>`.
pub type Result<T> = std::result::Result<T, PorkbunError>;
