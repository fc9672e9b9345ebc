use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::{ErrorResponse, Result};
use crate::core::extractor::AppJson;
use crate::features::hoardings::dtos::{
    CreateHoardingResponseDto, HoardingFieldsDto, HoardingResponseDto, MessageResponseDto,
};
use crate::features::hoardings::services::HoardingService;

/// Create a new hoarding
#[utoipa::path(
    post,
    path = "/hoardings",
    request_body = HoardingFieldsDto,
    responses(
        (status = 200, description = "Hoarding created successfully", body = CreateHoardingResponseDto),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "hoardings"
)]
pub async fn create_hoarding(
    State(service): State<Arc<HoardingService>>,
    AppJson(fields): AppJson<HoardingFieldsDto>,
) -> Result<Json<CreateHoardingResponseDto>> {
    let id = service.create(fields).await?;
    Ok(Json(CreateHoardingResponseDto {
        message: "Hoarding added".to_string(),
        id,
    }))
}

/// Get all hoardings
#[utoipa::path(
    get,
    path = "/hoardings",
    responses(
        (status = 200, description = "List of hoardings", body = Vec<HoardingResponseDto>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "hoardings"
)]
pub async fn list_hoardings(
    State(service): State<Arc<HoardingService>>,
) -> Result<Json<Vec<HoardingResponseDto>>> {
    let hoardings = service.list().await?;
    Ok(Json(hoardings))
}

/// Get hoarding by ID
///
/// A missing id answers 200 with an empty body, not 404.
#[utoipa::path(
    get,
    path = "/hoardings/{id}",
    params(
        ("id" = i32, Path, description = "Hoarding ID")
    ),
    responses(
        (status = 200, description = "Hoarding details, or an empty body when no row matches", body = HoardingResponseDto),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "hoardings"
)]
pub async fn get_hoarding(
    State(service): State<Arc<HoardingService>>,
    Path(id): Path<i32>,
) -> Result<Response> {
    match service.get_by_id(id).await? {
        Some(hoarding) => Ok(Json(hoarding).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// Update hoarding
///
/// Full replace of all non-key fields. Acknowledges success whether or not
/// any row matched the id.
#[utoipa::path(
    put,
    path = "/hoardings/{id}",
    params(
        ("id" = i32, Path, description = "Hoarding ID")
    ),
    request_body = HoardingFieldsDto,
    responses(
        (status = 200, description = "Hoarding updated successfully", body = MessageResponseDto),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "hoardings"
)]
pub async fn update_hoarding(
    State(service): State<Arc<HoardingService>>,
    Path(id): Path<i32>,
    AppJson(fields): AppJson<HoardingFieldsDto>,
) -> Result<Json<MessageResponseDto>> {
    service.update(id, fields).await?;
    Ok(Json(MessageResponseDto {
        message: "Hoarding updated".to_string(),
    }))
}

/// Delete hoarding
///
/// Acknowledges success whether or not any row matched the id.
#[utoipa::path(
    delete,
    path = "/hoardings/{id}",
    params(
        ("id" = i32, Path, description = "Hoarding ID")
    ),
    responses(
        (status = 200, description = "Hoarding deleted successfully", body = MessageResponseDto),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "hoardings"
)]
pub async fn delete_hoarding(
    State(service): State<Arc<HoardingService>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponseDto>> {
    service.delete(id).await?;
    Ok(Json(MessageResponseDto {
        message: "Hoarding deleted".to_string(),
    }))
}
