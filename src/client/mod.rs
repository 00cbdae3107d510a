//! The service-client seam: repositories build [`Request`]s and hand them
//! to one of these traits. HTTP policy (timeouts, retries, TLS) belongs
//! to the implementations, not to the callers.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::prelude::*;
use crate::request::Request;

mod asynch;
mod blocking;

pub use asynch::HttpClient;
pub use blocking::UreqClient;

/// Blocking transport: issue one request, decode one JSON body.
pub trait ServiceClient {
    fn send<T: DeserializeOwned>(&self, request: &Request) -> Result<T>;
}

/// Async transport. Implementations must observe the token twice: a
/// token that is already cancelled means the HTTP call is never issued,
/// and a token that fires mid-flight abandons result processing.
#[async_trait]
pub trait AsyncServiceClient: Send + Sync {
    async fn send<T>(&self, request: &Request, token: &CancellationToken) -> Result<T>
    where
        T: DeserializeOwned + Send;
}
