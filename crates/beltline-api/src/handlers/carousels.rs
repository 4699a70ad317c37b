//! Carousel endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use std::sync::Arc;
use tracing::{debug, info};

use beltline_db::entities::{carousel, prelude::*};
use beltline_db::seed;

use crate::error::ApiError;
use crate::models::{
    CarouselResponse, CreateCarouselRequest, ErrorResponse, UpdateCarouselRequest,
};
use crate::AppState;

/// List all carousels
#[utoipa::path(
    get,
    path = "/carousels",
    responses(
        (status = 200, description = "List of carousels", body = [CarouselResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "carousels"
)]
pub async fn list_carousels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CarouselResponse>>, ApiError> {
    debug!("Listing carousels");

    let carousels = Carousel::find().all(&state.db).await?;

    Ok(Json(
        carousels.into_iter().map(CarouselResponse::from).collect(),
    ))
}

/// Get a specific carousel by ID
#[utoipa::path(
    get,
    path = "/carousels/{carousel_id}",
    params(
        ("carousel_id" = String, Path, description = "Carousel identifier")
    ),
    responses(
        (status = 200, description = "Carousel record", body = CarouselResponse),
        (status = 404, description = "Carousel not found", body = ErrorResponse)
    ),
    tag = "carousels"
)]
pub async fn get_carousel(
    State(state): State<Arc<AppState>>,
    Path(carousel_id): Path<String>,
) -> Result<Json<CarouselResponse>, ApiError> {
    debug!("Getting carousel: {}", carousel_id);

    let carousel = Carousel::find_by_id(&carousel_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Carousel not found".to_string()))?;

    Ok(Json(carousel.into()))
}

/// Create a new carousel
#[utoipa::path(
    post,
    path = "/carousels",
    request_body = CreateCarouselRequest,
    responses(
        (status = 201, description = "Carousel created", body = CarouselResponse),
        (status = 400, description = "Invalid payload or carousel already exists", body = ErrorResponse)
    ),
    tag = "carousels"
)]
pub async fn create_carousel(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCarouselRequest>,
) -> Result<(StatusCode, Json<CarouselResponse>), ApiError> {
    payload.validate()?;

    if Carousel::find_by_id(&payload.carousel_id)
        .one(&state.db)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Carousel already exists".to_string()));
    }

    let carousel = carousel::ActiveModel {
        carousel_id: Set(payload.carousel_id),
        terminal: Set(payload.terminal),
        capacity: Set(payload.capacity),
        is_active: Set(payload.is_active),
    }
    .insert(&state.db)
    .await?;

    info!("Created carousel {}", carousel.carousel_id);

    Ok((StatusCode::CREATED, Json(carousel.into())))
}

/// Partially update a carousel
///
/// Only the supplied fields are applied; an explicit null clears the
/// terminal.
#[utoipa::path(
    patch,
    path = "/carousels/{carousel_id}",
    params(
        ("carousel_id" = String, Path, description = "Carousel identifier")
    ),
    request_body = UpdateCarouselRequest,
    responses(
        (status = 200, description = "Updated carousel", body = CarouselResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Carousel not found", body = ErrorResponse)
    ),
    tag = "carousels"
)]
pub async fn update_carousel(
    State(state): State<Arc<AppState>>,
    Path(carousel_id): Path<String>,
    Json(payload): Json<UpdateCarouselRequest>,
) -> Result<Json<CarouselResponse>, ApiError> {
    payload.validate()?;

    let carousel = Carousel::find_by_id(&carousel_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Carousel not found".to_string()))?;

    let mut active: carousel::ActiveModel = carousel.clone().into();
    if let Some(terminal) = payload.terminal {
        active.terminal = Set(terminal);
    }
    if let Some(capacity) = payload.capacity {
        active.capacity = Set(capacity);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }

    // An empty patch is a no-op, not an error
    let updated = if active.is_changed() {
        active.update(&state.db).await?
    } else {
        carousel
    };

    info!("Updated carousel {}", updated.carousel_id);

    Ok(Json(updated.into()))
}

/// Seed carousels C1..C24
///
/// Idempotent: identifiers already present are skipped and only newly
/// inserted rows are returned.
#[utoipa::path(
    post,
    path = "/carousels/init",
    responses(
        (status = 201, description = "Newly seeded carousels", body = [CarouselResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "carousels"
)]
pub async fn init_carousels(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<CarouselResponse>>), ApiError> {
    let created = seed::seed_carousels(&state.db).await?;

    Ok((
        StatusCode::CREATED,
        Json(created.into_iter().map(CarouselResponse::from).collect()),
    ))
}
