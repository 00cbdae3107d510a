use std::sync::OnceLock;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{AsyncRepository, Repository};
use crate::client::{AsyncServiceClient, ServiceClient};
use crate::end_point::worlds::{self, WorldDto, Worlds};
use crate::end_point::{EndPoint, EndPointIds};
use crate::lang::Language;
use crate::model::world::{World, WorldId};
use crate::prelude::*;
use crate::request::Request;

/// `/v2/worlds`. Small enough that the endpoint honors `ids=all`, so the
/// full collection is supported and memoized: the first `find_all`
/// populates a compute-once cell, later callers read it without touching
/// the network.
pub struct WorldRepository<C> {
    client: C,
    lang: Option<Language>,
    all: OnceLock<Vec<World>>,
}

impl<C> WorldRepository<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            lang: None,
            all: OnceLock::new(),
        }
    }

    pub fn with_lang(client: C, lang: Language) -> Self {
        Self {
            client,
            lang: Some(lang),
            all: OnceLock::new(),
        }
    }

    fn request(&self) -> Request {
        let request = Request::new(<Worlds as EndPointIds>::get_url());
        match self.lang {
            Some(lang) => request.lang(lang),
            None => request,
        }
    }

    fn memoize(&self, fetched: Vec<World>) -> Vec<World> {
        self.all.get_or_init(|| fetched).clone()
    }
}

impl<C: ServiceClient> Repository for WorldRepository<C> {
    type Id = WorldId;
    type Entity = World;

    fn resource(&self) -> &'static str {
        "worlds"
    }

    fn discover(&self) -> Result<Vec<WorldId>> {
        self.client
            .send(&Request::new(<Worlds as EndPoint>::get_url()))
    }

    fn find(&self, id: WorldId) -> Result<World> {
        let dto: WorldDto = self
            .client
            .send(&self.request().param("id", id.to_string()))?;
        Ok(worlds::world(dto))
    }

    fn find_all(&self) -> Result<Vec<World>> {
        if let Some(cached) = self.all.get() {
            return Ok(cached.clone());
        }
        let dtos: Vec<WorldDto> = self.client.send(&self.request().all_ids())?;
        Ok(self.memoize(dtos.into_iter().map(worlds::world).collect()))
    }

    fn find_by_ids(&self, ids: &[WorldId]) -> Result<Vec<World>> {
        let dtos: Vec<WorldDto> = self.client.send(&self.request().ids(ids))?;
        Ok(dtos.into_iter().map(worlds::world).collect())
    }

    fn find_page(&self, page: u32, page_size: Option<u32>) -> Result<Vec<World>> {
        let dtos: Vec<WorldDto> = self.client.send(&self.request().page(page, page_size))?;
        Ok(dtos.into_iter().map(worlds::world).collect())
    }
}

#[async_trait]
impl<C: AsyncServiceClient> AsyncRepository for WorldRepository<C> {
    type Id = WorldId;
    type Entity = World;

    fn resource(&self) -> &'static str {
        "worlds"
    }

    async fn discover_async(&self, token: &CancellationToken) -> Result<Vec<WorldId>> {
        self.client
            .send(&Request::new(<Worlds as EndPoint>::get_url()), token)
            .await
    }

    async fn find_async(&self, id: WorldId, token: &CancellationToken) -> Result<World> {
        let dto: WorldDto = self
            .client
            .send(&self.request().param("id", id.to_string()), token)
            .await?;
        Ok(worlds::world(dto))
    }

    async fn find_all_async(&self, token: &CancellationToken) -> Result<Vec<World>> {
        if let Some(cached) = self.all.get() {
            return Ok(cached.clone());
        }
        let dtos: Vec<WorldDto> = self.client.send(&self.request().all_ids(), token).await?;
        Ok(self.memoize(dtos.into_iter().map(worlds::world).collect()))
    }

    async fn find_by_ids_async(
        &self,
        ids: &[WorldId],
        token: &CancellationToken,
    ) -> Result<Vec<World>> {
        let dtos: Vec<WorldDto> = self.client.send(&self.request().ids(ids), token).await?;
        Ok(dtos.into_iter().map(worlds::world).collect())
    }

    async fn find_page_async(
        &self,
        page: u32,
        page_size: Option<u32>,
        token: &CancellationToken,
    ) -> Result<Vec<World>> {
        let dtos: Vec<WorldDto> = self
            .client
            .send(&self.request().page(page, page_size), token)
            .await?;
        Ok(dtos.into_iter().map(worlds::world).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::WorldRepository;
    use crate::model::world::Population;
    use crate::repository::testing::StaticClient;
    use crate::repository::Repository;

    fn worlds_body() -> serde_json::Value {
        json!([
            {"id": 1001, "name": "Anvil Rock", "population": "Medium"},
            {"id": 1002, "name": "Borlis Pass", "population": "Full"}
        ])
    }

    #[test]
    fn find_all_hits_the_network_once() {
        let repo = WorldRepository::new(StaticClient::new(worlds_body()));
        let first = repo.find_all().unwrap();
        let second = repo.find_all().unwrap();
        assert_eq!(first, second);
        assert_eq!(first[1].population, Population::Full);
        assert_eq!(repo.client.call_count(), 1);
    }

    #[test]
    fn every_operation_is_supported_here() {
        let repo = WorldRepository::new(StaticClient::new(worlds_body()));
        assert!(repo.find_by_ids(&[1001, 1002]).is_ok());
        assert!(repo.find_page(0, Some(10)).is_ok());
    }

    // live smoke test, run with `cargo test -- --ignored` when a
    // network is available
    #[tokio::test]
    #[ignore]
    async fn check_worlds() {
        use crate::client::HttpClient;
        use crate::repository::AsyncRepository;
        use tokio_util::sync::CancellationToken;

        let repo = WorldRepository::new(HttpClient::default());
        let token = CancellationToken::new();
        let ids = repo.discover_async(&token).await.unwrap();
        let world = repo.find_async(ids[0], &token).await.unwrap();
        assert_eq!(world.id, ids[0]);
    }
}
