//! Per-resource query façades. Each repository binds one endpoint, its
//! converter chain and a service client, and overrides exactly the
//! operations the upstream endpoint offers; everything else keeps the
//! default body and answers [`ApiError::NotSupported`] for any argument.

use std::fmt::Display;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::prelude::*;

mod build;
mod items;
mod maps;
mod recipes;
mod skins;
mod worlds;

pub use build::BuildService;
pub use items::ItemRepository;
pub use maps::MapRepository;
pub use recipes::RecipeRepository;
pub use skins::SkinRepository;
pub use worlds::WorldRepository;

/// Blocking query surface.
pub trait Repository {
    type Id: Display;
    type Entity;

    /// The endpoint name used in `NotSupported` errors.
    fn resource(&self) -> &'static str;

    /// Enumerate every id the endpoint knows.
    fn discover(&self) -> Result<Vec<Self::Id>> {
        Err(ApiError::not_supported("discover", self.resource()))
    }

    fn find(&self, _id: Self::Id) -> Result<Self::Entity> {
        Err(ApiError::not_supported("find", self.resource()))
    }

    /// Fetch the entire collection in one query. Only a few endpoints
    /// allow this; the rest keep the default.
    fn find_all(&self) -> Result<Vec<Self::Entity>> {
        Err(ApiError::not_supported("find_all", self.resource()))
    }

    fn find_by_ids(&self, _ids: &[Self::Id]) -> Result<Vec<Self::Entity>> {
        Err(ApiError::not_supported("find_by_ids", self.resource()))
    }

    fn find_page(&self, _page: u32, _page_size: Option<u32>) -> Result<Vec<Self::Entity>> {
        Err(ApiError::not_supported("find_page", self.resource()))
    }
}

/// Async query surface. Mirrors [`Repository`] operation for operation;
/// every method takes a cancellation token that is forwarded to the
/// transport, which guarantees the call is never issued (or its result
/// never processed) once the token has fired.
#[async_trait]
pub trait AsyncRepository: Send + Sync {
    type Id: Display + Send + Sync;
    type Entity: Send;

    fn resource(&self) -> &'static str;

    async fn discover_async(&self, _token: &CancellationToken) -> Result<Vec<Self::Id>> {
        Err(ApiError::not_supported("discover", self.resource()))
    }

    async fn find_async(
        &self,
        _id: Self::Id,
        _token: &CancellationToken,
    ) -> Result<Self::Entity> {
        Err(ApiError::not_supported("find", self.resource()))
    }

    async fn find_all_async(&self, _token: &CancellationToken) -> Result<Vec<Self::Entity>> {
        Err(ApiError::not_supported("find_all", self.resource()))
    }

    async fn find_by_ids_async(
        &self,
        _ids: &[Self::Id],
        _token: &CancellationToken,
    ) -> Result<Vec<Self::Entity>> {
        Err(ApiError::not_supported("find_by_ids", self.resource()))
    }

    async fn find_page_async(
        &self,
        _page: u32,
        _page_size: Option<u32>,
        _token: &CancellationToken,
    ) -> Result<Vec<Self::Entity>> {
        Err(ApiError::not_supported("find_page", self.resource()))
    }
}
