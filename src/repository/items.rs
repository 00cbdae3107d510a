use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{AsyncRepository, Repository};
use crate::client::{AsyncServiceClient, ServiceClient};
use crate::end_point::items::{self, ItemDto, Items};
use crate::end_point::{EndPoint, EndPointIds};
use crate::lang::Language;
use crate::model::item::{Item, ItemId};
use crate::prelude::*;
use crate::request::Request;

/// `/v2/items`. The collection is far too large for `ids=all`, so
/// `find_all` stays unsupported; use `discover` + `find_by_ids` or
/// `find_page` instead.
pub struct ItemRepository<C> {
    client: C,
    lang: Option<Language>,
}

impl<C> ItemRepository<C> {
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
        let request = Request::new(<Items as EndPointIds>::get_url());
        match self.lang {
            Some(lang) => request.lang(lang),
            None => request,
        }
    }
}

impl<C: ServiceClient> Repository for ItemRepository<C> {
    type Id = ItemId;
    type Entity = Item;

    fn resource(&self) -> &'static str {
        "items"
    }

    fn discover(&self) -> Result<Vec<ItemId>> {
        self.client.send(&Request::new(<Items as EndPoint>::get_url()))
    }

    fn find(&self, id: ItemId) -> Result<Item> {
        let dto: ItemDto = self
            .client
            .send(&self.request().param("id", id.to_string()))?;
        Ok(items::convert::item(dto))
    }

    fn find_by_ids(&self, ids: &[ItemId]) -> Result<Vec<Item>> {
        let dtos: Vec<ItemDto> = self.client.send(&self.request().ids(ids))?;
        Ok(dtos.into_iter().map(items::convert::item).collect())
    }

    fn find_page(&self, page: u32, page_size: Option<u32>) -> Result<Vec<Item>> {
        let dtos: Vec<ItemDto> = self.client.send(&self.request().page(page, page_size))?;
        Ok(dtos.into_iter().map(items::convert::item).collect())
    }
}

#[async_trait]
impl<C: AsyncServiceClient> AsyncRepository for ItemRepository<C> {
    type Id = ItemId;
    type Entity = Item;

    fn resource(&self) -> &'static str {
        "items"
    }

    async fn discover_async(&self, token: &CancellationToken) -> Result<Vec<ItemId>> {
        self.client
            .send(&Request::new(<Items as EndPoint>::get_url()), token)
            .await
    }

    async fn find_async(&self, id: ItemId, token: &CancellationToken) -> Result<Item> {
        let dto: ItemDto = self
            .client
            .send(&self.request().param("id", id.to_string()), token)
            .await?;
        Ok(items::convert::item(dto))
    }

    async fn find_by_ids_async(
        &self,
        ids: &[ItemId],
        token: &CancellationToken,
    ) -> Result<Vec<Item>> {
        let dtos: Vec<ItemDto> = self.client.send(&self.request().ids(ids), token).await?;
        Ok(dtos.into_iter().map(items::convert::item).collect())
    }

    async fn find_page_async(
        &self,
        page: u32,
        page_size: Option<u32>,
        token: &CancellationToken,
    ) -> Result<Vec<Item>> {
        let dtos: Vec<ItemDto> = self
            .client
            .send(&self.request().page(page, page_size), token)
            .await?;
        Ok(dtos.into_iter().map(items::convert::item).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio_util::sync::CancellationToken;

    use super::ItemRepository;
    use crate::error::ApiError;
    use crate::model::item::ItemDetails;
    use crate::repository::testing::StaticClient;
    use crate::repository::{AsyncRepository, Repository};

    #[test]
    fn find_converts_the_wire_shape() {
        let client = StaticClient::new(json!({
            "id": 100,
            "name": "Rampager's Seer Coat of Divinity",
            "type": "Armor",
            "level": 66,
            "rarity": "Masterwork",
            "vendor_value": 166,
            "chat_link": "[&AgFkAAAA]",
            "flags": ["SoulBindOnUse"],
            "details": {
                "type": "Coat",
                "weight_class": "Light",
                "defense": 211,
                "secondary_suffix_item_id": ""
            }
        }));
        let repo = ItemRepository::new(client);
        let item = repo.find(100).unwrap();
        assert_eq!(item.level, 66);
        match item.details {
            ItemDetails::Armor(armor) => assert_eq!(armor.defense, 211),
            other => panic!("expected armor, got {other:?}"),
        }
    }

    #[test]
    fn find_all_is_not_supported() {
        let repo = ItemRepository::new(StaticClient::new(serde_json::Value::Null));
        let error = repo.find_all().unwrap_err();
        assert!(error.is_not_supported());
        assert_eq!(repo.client.call_count(), 0);
    }

    #[tokio::test]
    async fn find_all_async_is_not_supported_too() {
        let repo = ItemRepository::new(StaticClient::new(serde_json::Value::Null));
        let error = repo
            .find_all_async(&CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            ApiError::NotSupported {
                operation: "find_all",
                resource: "items"
            }
        ));
    }

    #[tokio::test]
    async fn cancelled_token_stops_the_query() {
        let repo = ItemRepository::new(StaticClient::new(serde_json::json!([])));
        let token = CancellationToken::new();
        token.cancel();
        let error = repo.discover_async(&token).await.unwrap_err();
        assert!(matches!(error, ApiError::Cancelled));
        assert_eq!(repo.client.call_count(), 0);
    }
}
