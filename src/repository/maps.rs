use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{AsyncRepository, Repository};
use crate::client::{AsyncServiceClient, ServiceClient};
use crate::end_point::maps::{self, MapDto, Maps};
use crate::end_point::{EndPoint, EndPointIds};
use crate::lang::Language;
use crate::model::map::{Map, MapId};
use crate::prelude::*;
use crate::request::Request;

/// `/v2/maps`. Supports the full operation set including `ids=all`.
pub struct MapRepository<C> {
    client: C,
    lang: Option<Language>,
}

impl<C> MapRepository<C> {
    pub fn new(client: C) -> Self {
        Self { client, lang: None }
    }

    pub fn with_lang(client: C, lang: Language) -> Self {
        Self {
            client,
            lang: Some(lang),
        }
    }

    fn request(&self) -> Request {
        let request = Request::new(<Maps as EndPointIds>::get_url());
        match self.lang {
            Some(lang) => request.lang(lang),
            None => request,
        }
    }
}

impl<C: ServiceClient> Repository for MapRepository<C> {
    type Id = MapId;
    type Entity = Map;

    fn resource(&self) -> &'static str {
        "maps"
    }

    fn discover(&self) -> Result<Vec<MapId>> {
        self.client.send(&Request::new(<Maps as EndPoint>::get_url()))
    }

    fn find(&self, id: MapId) -> Result<Map> {
        let dto: MapDto = self
            .client
            .send(&self.request().param("id", id.to_string()))?;
        Ok(maps::map(dto))
    }

    fn find_all(&self) -> Result<Vec<Map>> {
        let dtos: Vec<MapDto> = self.client.send(&self.request().all_ids())?;
        Ok(dtos.into_iter().map(maps::map).collect())
    }

    fn find_by_ids(&self, ids: &[MapId]) -> Result<Vec<Map>> {
        let dtos: Vec<MapDto> = self.client.send(&self.request().ids(ids))?;
        Ok(dtos.into_iter().map(maps::map).collect())
    }

    fn find_page(&self, page: u32, page_size: Option<u32>) -> Result<Vec<Map>> {
        let dtos: Vec<MapDto> = self.client.send(&self.request().page(page, page_size))?;
        Ok(dtos.into_iter().map(maps::map).collect())
    }
}

#[async_trait]
impl<C: AsyncServiceClient> AsyncRepository for MapRepository<C> {
    type Id = MapId;
    type Entity = Map;

    fn resource(&self) -> &'static str {
        "maps"
    }

    async fn discover_async(&self, token: &CancellationToken) -> Result<Vec<MapId>> {
        self.client
            .send(&Request::new(<Maps as EndPoint>::get_url()), token)
            .await
    }

    async fn find_async(&self, id: MapId, token: &CancellationToken) -> Result<Map> {
        let dto: MapDto = self
            .client
            .send(&self.request().param("id", id.to_string()), token)
            .await?;
        Ok(maps::map(dto))
    }

    async fn find_all_async(&self, token: &CancellationToken) -> Result<Vec<Map>> {
        let dtos: Vec<MapDto> = self.client.send(&self.request().all_ids(), token).await?;
        Ok(dtos.into_iter().map(maps::map).collect())
    }

    async fn find_by_ids_async(
        &self,
        ids: &[MapId],
        token: &CancellationToken,
    ) -> Result<Vec<Map>> {
        let dtos: Vec<MapDto> = self.client.send(&self.request().ids(ids), token).await?;
        Ok(dtos.into_iter().map(maps::map).collect())
    }

    async fn find_page_async(
        &self,
        page: u32,
        page_size: Option<u32>,
        token: &CancellationToken,
    ) -> Result<Vec<Map>> {
        let dtos: Vec<MapDto> = self
            .client
            .send(&self.request().page(page, page_size), token)
            .await?;
        Ok(dtos.into_iter().map(maps::map).collect())
    }
}
