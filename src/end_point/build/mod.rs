use super::EndPoint;
use crate::model::build::{Build, BuildId};
use crate::prelude::*;

const E_P_URL: &str = const_format::concatcp!(crate::API_BASE_V2_URL, "/build");

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BuildDto {
    pub id: BuildId,
}

pub struct BuildEndPoint;

impl EndPoint for BuildEndPoint {
    type RType = BuildDto;
    fn get_url() -> &'static str {
        E_P_URL
    }
}

pub(crate) fn build(dto: BuildDto) -> Build {
    Build { id: dto.id }
}
