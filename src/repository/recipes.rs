use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{AsyncRepository, Repository};
use crate::client::{AsyncServiceClient, ServiceClient};
use crate::end_point::recipes::{self, RecipeDto, Recipes};
use crate::end_point::{EndPoint, EndPointIds};
use crate::model::recipe::{Recipe, RecipeId};
use crate::prelude::*;
use crate::request::Request;

/// `/v2/recipes`. Recipes carry no localized text, so there is no
/// language parameter here, and the collection is too large for
/// `find_all`.
pub struct RecipeRepository<C> {
    client: C,
}

impl<C> RecipeRepository<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: ServiceClient> Repository for RecipeRepository<C> {
    type Id = RecipeId;
    type Entity = Recipe;

    fn resource(&self) -> &'static str {
        "recipes"
    }

    fn discover(&self) -> Result<Vec<RecipeId>> {
        self.client
            .send(&Request::new(<Recipes as EndPoint>::get_url()))
    }

    fn find(&self, id: RecipeId) -> Result<Recipe> {
        let dto: RecipeDto = self.client.send(
            &Request::new(<Recipes as EndPointIds>::get_url()).param("id", id.to_string()),
        )?;
        Ok(recipes::recipe(dto))
    }

    fn find_by_ids(&self, ids: &[RecipeId]) -> Result<Vec<Recipe>> {
        let dtos: Vec<RecipeDto> = self
            .client
            .send(&Request::new(<Recipes as EndPointIds>::get_url()).ids(ids))?;
        Ok(dtos.into_iter().map(recipes::recipe).collect())
    }

    fn find_page(&self, page: u32, page_size: Option<u32>) -> Result<Vec<Recipe>> {
        let dtos: Vec<RecipeDto> = self.client.send(
            &Request::new(<Recipes as EndPointIds>::get_url()).page(page, page_size),
        )?;
        Ok(dtos.into_iter().map(recipes::recipe).collect())
    }
}

#[async_trait]
impl<C: AsyncServiceClient> AsyncRepository for RecipeRepository<C> {
    type Id = RecipeId;
    type Entity = Recipe;

    fn resource(&self) -> &'static str {
        "recipes"
    }

    async fn discover_async(&self, token: &CancellationToken) -> Result<Vec<RecipeId>> {
        self.client
            .send(&Request::new(<Recipes as EndPoint>::get_url()), token)
            .await
    }

    async fn find_async(&self, id: RecipeId, token: &CancellationToken) -> Result<Recipe> {
        let dto: RecipeDto = self
            .client
            .send(
                &Request::new(<Recipes as EndPointIds>::get_url()).param("id", id.to_string()),
                token,
            )
            .await?;
        Ok(recipes::recipe(dto))
    }

    async fn find_by_ids_async(
        &self,
        ids: &[RecipeId],
        token: &CancellationToken,
    ) -> Result<Vec<Recipe>> {
        let dtos: Vec<RecipeDto> = self
            .client
            .send(
                &Request::new(<Recipes as EndPointIds>::get_url()).ids(ids),
                token,
            )
            .await?;
        Ok(dtos.into_iter().map(recipes::recipe).collect())
    }

    async fn find_page_async(
        &self,
        page: u32,
        page_size: Option<u32>,
        token: &CancellationToken,
    ) -> Result<Vec<Recipe>> {
        let dtos: Vec<RecipeDto> = self
            .client
            .send(
                &Request::new(<Recipes as EndPointIds>::get_url()).page(page, page_size),
                token,
            )
            .await?;
        Ok(dtos.into_iter().map(recipes::recipe).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::RecipeRepository;
    use crate::repository::testing::StaticClient;
    use crate::repository::Repository;

    #[test]
    fn find_all_is_not_supported() {
        let repo = RecipeRepository::new(StaticClient::new(serde_json::Value::Null));
        assert!(repo.find_all().unwrap_err().is_not_supported());
        assert_eq!(repo.client.call_count(), 0);
    }
}
