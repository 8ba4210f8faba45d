use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Region CRUD
        regions_handlers::list_regions,
        regions_handlers::get_region,
        regions_handlers::create_region,
        regions_handlers::update_region,
        regions_handlers::delete_region,
    ),
    components(
        schemas(
            ApiResponse<regions_dtos::RegionResponseDto>,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            Meta,
            regions_dtos::RegionDto,
            regions_dtos::RegionResponseDto,
        )
    ),
    tags(
        (name = "region", description = "Northwind region CRUD operations"),
    ),
    info(
        title = "Northwind Region API",
        version = "0.1.0",
        description = "CRUD API for Northwind regions",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
