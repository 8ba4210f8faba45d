use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::models::Region;

/// Request DTO for create and update. The caller supplies the complete
/// record; updates are full replacements, never partial patches.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    /// Caller-assigned primary key
    #[schema(example = 5)]
    pub region_id: i32,
    #[schema(example = "Northern")]
    pub region_description: String,
    /// Concurrency token. When supplied on update, the write only commits
    /// if the stored row still carries this version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_version: Option<i64>,
}

/// Response DTO for region data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub region_id: i32,
    pub region_description: String,
    pub row_version: i64,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            region_id: region.region_id,
            region_description: region.region_description,
            row_version: region.row_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_dto_carries_all_row_fields() {
        let region = Region {
            region_id: 5,
            region_description: "Test".to_string(),
            row_version: 3,
        };

        let dto: RegionResponseDto = region.into();
        assert_eq!(dto.region_id, 5);
        assert_eq!(dto.region_description, "Test");
        assert_eq!(dto.row_version, 3);
    }

    #[test]
    fn request_dto_accepts_body_without_row_version() {
        let dto: RegionDto =
            serde_json::from_str(r#"{"regionId":5,"regionDescription":"Test"}"#).unwrap();
        assert_eq!(dto.region_id, 5);
        assert!(dto.row_version.is_none());
    }

    #[test]
    fn request_dto_rejects_null_body() {
        let parsed = serde_json::from_str::<RegionDto>("null");
        assert!(parsed.is_err());
    }
}
