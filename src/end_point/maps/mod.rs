use super::{EndPoint, EndPointIds};
use crate::convert;
use crate::model::map::{Map, MapId};
use crate::prelude::*;

const E_P_URL: &str = const_format::concatcp!(crate::API_BASE_V2_URL, "/maps");

/// Rectangles arrive as nested arrays; lengths are validated by the
/// converter, not by serde, so a malformed response still decodes.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MapDto {
    pub id: MapId,
    #[serde(default)]
    pub name: String,
    pub min_level: Option<u32>,
    pub max_level: Option<u32>,
    pub default_floor: Option<i32>,
    #[serde(default)]
    pub floors: Vec<i32>,
    pub region_id: Option<u32>,
    pub region_name: Option<String>,
    pub continent_id: Option<u32>,
    pub continent_name: Option<String>,
    #[serde(default)]
    pub map_rect: Vec<Vec<f64>>,
    #[serde(default)]
    pub continent_rect: Vec<Vec<f64>>,
}

pub struct Maps;

impl EndPoint for Maps {
    type RType = Vec<MapId>;
    fn get_url() -> &'static str {
        E_P_URL
    }
}

impl EndPointIds for Maps {
    type Id = MapId;
    type RType = Vec<MapDto>;

    fn get_url() -> &'static str {
        E_P_URL
    }
}

pub(crate) fn map(dto: MapDto) -> Map {
    Map {
        id: dto.id,
        name: dto.name,
        min_level: dto.min_level.unwrap_or_default(),
        max_level: dto.max_level.unwrap_or_default(),
        default_floor: dto.default_floor.unwrap_or_default(),
        floors: dto.floors,
        region_id: dto.region_id,
        region_name: dto.region_name,
        continent_id: dto.continent_id,
        continent_name: dto.continent_name,
        map_rect: convert::rect(&dto.map_rect),
        continent_rect: convert::rect(&dto.continent_rect),
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::{map, MapDto};

    fn queensdale() -> MapDto {
        MapDto {
            id: 15,
            name: "Queensdale".to_string(),
            min_level: Some(1),
            max_level: Some(15),
            default_floor: Some(1),
            floors: vec![0, 1],
            region_id: Some(4),
            region_name: Some("Kryta".to_string()),
            continent_id: Some(1),
            continent_name: Some("Tyria".to_string()),
            map_rect: vec![vec![-43008.0, -27648.0], vec![43008.0, 30720.0]],
            continent_rect: vec![vec![9856.0, 11648.0], vec![13440.0, 14080.0]],
        }
    }

    #[test]
    fn rects_preserve_corners() {
        let converted = map(queensdale());
        let map_rect = converted.map_rect.unwrap();
        assert_eq!(map_rect.min, DVec2::new(-43008.0, -27648.0));
        assert_eq!(map_rect.max, DVec2::new(43008.0, 30720.0));
        assert!(converted.continent_rect.is_some());
    }

    #[test]
    fn malformed_rects_are_skipped() {
        let mut dto = queensdale();
        dto.map_rect = vec![vec![-43008.0, -27648.0]];
        dto.continent_rect = vec![vec![9856.0], vec![13440.0, 14080.0]];
        let converted = map(dto);
        assert_eq!(converted.map_rect, None);
        assert_eq!(converted.continent_rect, None);
    }

    #[test]
    fn absent_fields_leave_defaults() {
        let converted = map(MapDto::default());
        assert_eq!(converted.min_level, 0);
        assert_eq!(converted.max_level, 0);
        assert_eq!(converted.region_name, None);
        assert_eq!(converted.map_rect, None);
    }
}
