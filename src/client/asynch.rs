use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use super::AsyncServiceClient;
use crate::prelude::*;
use crate::request::Request;

/// Async client over a [`reqwest::Client`].
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(crate::USER_AGENT)
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl AsyncServiceClient for HttpClient {
    async fn send<T>(&self, request: &Request, token: &CancellationToken) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        if token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let url = request.url()?;
        debug!(%url, "sending async request");
        let roundtrip = async {
            let response = self.client.get(url.clone()).send().await?.error_for_status()?;
            Ok(response.json::<T>().await?)
        };
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(ApiError::Cancelled),
            outcome = roundtrip => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio_util::sync::CancellationToken;

    use super::HttpClient;
    use crate::client::AsyncServiceClient;
    use crate::error::ApiError;
    use crate::request::Request;

    #[tokio::test]
    async fn cancelled_token_short_circuits() {
        let client = HttpClient::default();
        let token = CancellationToken::new();
        token.cancel();
        // never reaches the network: the URL below is not routable anyway
        let result: Result<Vec<u32>, _> = client
            .send(&Request::new("https://api.invalid/v2/worlds"), &token)
            .await;
        assert!(matches!(result, Err(ApiError::Cancelled)));
    }
}
