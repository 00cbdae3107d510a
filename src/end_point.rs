//! One module per API resource: the URL constant, the raw DTOs exactly
//! as the JSON ships them, and the converters into [`crate::model`]
//! entities. DTOs keep every field optional or loosely typed on purpose;
//! the converters are where meaning is assigned.

use serde::de::DeserializeOwned;
use std::fmt::Display;

pub mod build;
pub mod items;
pub mod maps;
pub mod recipes;
pub mod skins;
pub mod worlds;

/// A resource whose bare URL enumerates ids.
pub trait EndPoint {
    type RType: DeserializeOwned;
    fn get_url() -> &'static str;
}

/// A resource that resolves `ids=` bulk queries into DTOs.
pub trait EndPointIds {
    type Id: Display + Send + Sync;
    type RType: DeserializeOwned;
    fn get_url() -> &'static str;
}
