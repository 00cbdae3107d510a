use serde::de::DeserializeOwned;

use super::ServiceClient;
use crate::prelude::*;
use crate::request::Request;

/// Blocking client over a [`ureq::Agent`].
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().user_agent(crate::USER_AGENT).build(),
        }
    }
}

impl ServiceClient for UreqClient {
    fn send<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let url = request.url()?;
        debug!(%url, "sending blocking request");
        let response = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|e| ApiError::Http(Box::new(e)))?;
        Ok(serde_json::from_reader(response.into_reader())?)
    }
}
