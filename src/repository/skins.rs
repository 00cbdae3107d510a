use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{AsyncRepository, Repository};
use crate::client::{AsyncServiceClient, ServiceClient};
use crate::end_point::skins::{self, SkinDto, Skins};
use crate::end_point::{EndPoint, EndPointIds};
use crate::lang::Language;
use crate::model::skin::{Skin, SkinId};
use crate::prelude::*;
use crate::request::Request;

/// `/v2/skins`. Same support matrix as items: no `find_all`.
pub struct SkinRepository<C> {
    client: C,
    lang: Option<Language>,
}

impl<C> SkinRepository<C> {
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
        let request = Request::new(<Skins as EndPointIds>::get_url());
        match self.lang {
            Some(lang) => request.lang(lang),
            None => request,
        }
    }
}

impl<C: ServiceClient> Repository for SkinRepository<C> {
    type Id = SkinId;
    type Entity = Skin;

    fn resource(&self) -> &'static str {
        "skins"
    }

    fn discover(&self) -> Result<Vec<SkinId>> {
        self.client.send(&Request::new(<Skins as EndPoint>::get_url()))
    }

    fn find(&self, id: SkinId) -> Result<Skin> {
        let dto: SkinDto = self
            .client
            .send(&self.request().param("id", id.to_string()))?;
        Ok(skins::convert::skin(dto))
    }

    fn find_by_ids(&self, ids: &[SkinId]) -> Result<Vec<Skin>> {
        let dtos: Vec<SkinDto> = self.client.send(&self.request().ids(ids))?;
        Ok(dtos.into_iter().map(skins::convert::skin).collect())
    }

    fn find_page(&self, page: u32, page_size: Option<u32>) -> Result<Vec<Skin>> {
        let dtos: Vec<SkinDto> = self.client.send(&self.request().page(page, page_size))?;
        Ok(dtos.into_iter().map(skins::convert::skin).collect())
    }
}

#[async_trait]
impl<C: AsyncServiceClient> AsyncRepository for SkinRepository<C> {
    type Id = SkinId;
    type Entity = Skin;

    fn resource(&self) -> &'static str {
        "skins"
    }

    async fn discover_async(&self, token: &CancellationToken) -> Result<Vec<SkinId>> {
        self.client
            .send(&Request::new(<Skins as EndPoint>::get_url()), token)
            .await
    }

    async fn find_async(&self, id: SkinId, token: &CancellationToken) -> Result<Skin> {
        let dto: SkinDto = self
            .client
            .send(&self.request().param("id", id.to_string()), token)
            .await?;
        Ok(skins::convert::skin(dto))
    }

    async fn find_by_ids_async(
        &self,
        ids: &[SkinId],
        token: &CancellationToken,
    ) -> Result<Vec<Skin>> {
        let dtos: Vec<SkinDto> = self.client.send(&self.request().ids(ids), token).await?;
        Ok(dtos.into_iter().map(skins::convert::skin).collect())
    }

    async fn find_page_async(
        &self,
        page: u32,
        page_size: Option<u32>,
        token: &CancellationToken,
    ) -> Result<Vec<Skin>> {
        let dtos: Vec<SkinDto> = self
            .client
            .send(&self.request().page(page, page_size), token)
            .await?;
        Ok(dtos.into_iter().map(skins::convert::skin).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::SkinRepository;
    use crate::model::skin::SkinDetails;
    use crate::repository::testing::StaticClient;
    use crate::repository::Repository;

    #[test]
    fn find_by_ids_converts_every_element() {
        let client = StaticClient::new(json!([
            {"id": 1, "name": "Chainmail Leggings", "type": "Armor",
             "details": {"type": "Leggings", "weight_class": "Heavy"}},
            {"id": 2, "name": "Mystery Skin", "type": "NotYetInvented"}
        ]));
        let repo = SkinRepository::new(client);
        let converted = repo.find_by_ids(&[1, 2]).unwrap();
        assert_eq!(converted.len(), 2);
        assert!(matches!(converted[0].details, SkinDetails::Armor(_)));
        assert_eq!(
            converted[1].details,
            SkinDetails::Unknown("NotYetInvented".to_string())
        );
    }

    #[test]
    fn find_all_is_not_supported() {
        let repo = SkinRepository::new(StaticClient::new(serde_json::Value::Null));
        assert!(repo.find_all().unwrap_err().is_not_supported());
    }
}
