use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorResponse;
use crate::features::hoardings::{dtos as hoardings_dtos, handlers as hoardings_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        hoardings_handlers::create_hoarding,
        hoardings_handlers::list_hoardings,
        hoardings_handlers::get_hoarding,
        hoardings_handlers::update_hoarding,
        hoardings_handlers::delete_hoarding,
    ),
    components(
        schemas(
            hoardings_dtos::HoardingFieldsDto,
            hoardings_dtos::HoardingResponseDto,
            hoardings_dtos::CreateHoardingResponseDto,
            hoardings_dtos::MessageResponseDto,
            ErrorResponse,
        )
    ),
    tags(
        (name = "hoardings", description = "CRUD operations for hoardings table"),
    ),
    info(
        title = "Hoardings API",
        version = "1.0.0",
        description = "CRUD operations for hoardings table",
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
