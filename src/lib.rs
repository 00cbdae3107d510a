//! Typed client for the Guild Wars 2 public REST API.
//!
//! The crate is layered the way the data flows:
//! 1. [`end_point`] holds one module per API resource: the URL constant,
//!    the raw serde DTOs and the converters that turn them into entities.
//! 2. [`model`] holds the strongly typed entities those converters build.
//! 3. [`repository`] binds an endpoint, a converter chain and a
//!    [`client`] together and exposes `find`/`find_all`/`discover` style
//!    queries, blocking and async.
//!
//! Unrecognized `type` discriminators decode to explicit `Unknown`
//! variants instead of failing, so additions on the API side never break
//! existing callers.
//!
//! resources:
//! 1. https://wiki.guildwars2.com/wiki/API:2
//! 2. https://wiki.guildwars2.com/wiki/API:Main

pub mod cache;
pub mod client;
pub(crate) mod convert;
pub mod end_point;
pub mod error;
pub mod lang;
pub mod model;
pub mod repository;
pub mod request;

pub use error::{ApiError, Result};
pub use lang::Language;

const API_BASE_URL: &str = "https://api.guildwars2.com";
pub(crate) const API_BASE_V2_URL: &str = const_format::concatcp!(API_BASE_URL, "/v2");

pub(crate) const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub(crate) mod prelude {
    pub use crate::error::{ApiError, Result};
    pub use serde::{Deserialize, Serialize};
    pub use tracing::{debug, warn};
    pub use url::Url;
}
