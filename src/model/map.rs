use super::common::Rect;
use crate::prelude::*;

pub type MapId = u32;

/// One map of the world, with its placement inside its continent.
///
/// The rectangles stay `None` when the API response omits them or ships
/// them with the wrong number of corners; no placement is synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub id: MapId,
    pub name: String,
    pub min_level: u32,
    pub max_level: u32,
    pub default_floor: i32,
    pub floors: Vec<i32>,
    pub region_id: Option<u32>,
    pub region_name: Option<String>,
    pub continent_id: Option<u32>,
    pub continent_name: Option<String>,
    /// Map coordinate bounds.
    pub map_rect: Option<Rect>,
    /// Where the map sits in continent coordinates.
    pub continent_rect: Option<Rect>,
}
