use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Every failure surfaced by this crate.
///
/// Transport failures are propagated as-is, never retried or wrapped with
/// policy. Unrecognized discriminators and unparseable optional fields
/// are not errors at all: they decode to `Unknown` variants or defaults
/// inside the converters.
#[derive(Debug, Error, Diagnostic)]
pub enum ApiError {
    /// The upstream endpoint does not offer this operation at all, for
    /// any arguments. Distinct from every transport failure.
    #[error("`{operation}` is not supported by the `{resource}` endpoint")]
    #[diagnostic(code(tyria_api::not_supported))]
    NotSupported {
        operation: &'static str,
        resource: &'static str,
    },
    #[error("blocking transport error")]
    #[diagnostic(code(tyria_api::blocking_http))]
    Http(#[from] Box<ureq::Error>),
    #[error("async transport error")]
    #[diagnostic(code(tyria_api::async_http))]
    AsyncHttp(#[from] reqwest::Error),
    #[error("failed to decode response body")]
    #[diagnostic(code(tyria_api::json))]
    Json(#[from] serde_json::Error),
    /// The caller's cancellation token fired before the request finished.
    #[error("request was cancelled")]
    #[diagnostic(code(tyria_api::cancelled))]
    Cancelled,
    #[error("invalid request url")]
    #[diagnostic(code(tyria_api::url))]
    Url(#[from] url::ParseError),
    #[error("cache file io error")]
    #[diagnostic(code(tyria_api::cache_io))]
    Io(#[from] std::io::Error),
    #[error("cache envelope encode error")]
    #[diagnostic(code(tyria_api::cache_codec))]
    Cache(#[from] bincode::Error),
}

impl ApiError {
    pub(crate) fn not_supported(operation: &'static str, resource: &'static str) -> Self {
        Self::NotSupported {
            operation,
            resource,
        }
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported { .. })
    }
}
