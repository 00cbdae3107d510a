use tokio_util::sync::CancellationToken;

use crate::client::{AsyncServiceClient, ServiceClient};
use crate::end_point::build::{self, BuildDto, BuildEndPoint};
use crate::end_point::EndPoint;
use crate::model::build::Build;
use crate::prelude::*;
use crate::request::Request;

/// `/v2/build`. Not a collection, so this is a dedicated service rather
/// than a [`super::Repository`]: the only query is "which build is the
/// API serving right now".
pub struct BuildService<C> {
    client: C,
}

impl<C> BuildService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: ServiceClient> BuildService<C> {
    pub fn current(&self) -> Result<Build> {
        let dto: BuildDto = self
            .client
            .send(&Request::new(BuildEndPoint::get_url()))?;
        Ok(build::build(dto))
    }
}

impl<C: AsyncServiceClient> BuildService<C> {
    pub async fn current_async(&self, token: &CancellationToken) -> Result<Build> {
        let dto: BuildDto = self
            .client
            .send(&Request::new(BuildEndPoint::get_url()), token)
            .await?;
        Ok(build::build(dto))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::BuildService;
    use crate::repository::testing::StaticClient;

    #[test]
    fn current_build_decodes() {
        let service = BuildService::new(StaticClient::new(json!({"id": 115267})));
        assert_eq!(service.current().unwrap().id, 115267);
    }
}
