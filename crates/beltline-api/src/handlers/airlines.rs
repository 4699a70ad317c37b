//! Airline endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use std::sync::Arc;
use tracing::{debug, info};

use beltline_db::entities::{airline, prelude::*};
use beltline_db::seed;

use crate::error::ApiError;
use crate::models::{AirlineResponse, CreateAirlineRequest, ErrorResponse};
use crate::AppState;

/// List all airlines with their display colors
#[utoipa::path(
    get,
    path = "/airlines",
    responses(
        (status = 200, description = "List of airlines", body = [AirlineResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "airlines"
)]
pub async fn list_airlines(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AirlineResponse>>, ApiError> {
    debug!("Listing airlines");

    let airlines = Airline::find().all(&state.db).await?;

    Ok(Json(
        airlines.into_iter().map(AirlineResponse::from).collect(),
    ))
}

/// Get a specific airline by code
#[utoipa::path(
    get,
    path = "/airlines/{airline_code}",
    params(
        ("airline_code" = String, Path, description = "Carrier code")
    ),
    responses(
        (status = 200, description = "Airline record", body = AirlineResponse),
        (status = 404, description = "Airline not found", body = ErrorResponse)
    ),
    tag = "airlines"
)]
pub async fn get_airline(
    State(state): State<Arc<AppState>>,
    Path(airline_code): Path<String>,
) -> Result<Json<AirlineResponse>, ApiError> {
    debug!("Getting airline: {}", airline_code);

    let airline = Airline::find_by_id(&airline_code)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Airline not found".to_string()))?;

    Ok(Json(airline.into()))
}

/// Create a new airline
#[utoipa::path(
    post,
    path = "/airlines",
    request_body = CreateAirlineRequest,
    responses(
        (status = 201, description = "Airline created", body = AirlineResponse),
        (status = 400, description = "Invalid payload or airline already exists", body = ErrorResponse)
    ),
    tag = "airlines"
)]
pub async fn create_airline(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAirlineRequest>,
) -> Result<(StatusCode, Json<AirlineResponse>), ApiError> {
    payload.validate()?;

    if Airline::find_by_id(&payload.airline_code)
        .one(&state.db)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Airline already exists".to_string()));
    }

    let airline = airline::ActiveModel {
        airline_code: Set(payload.airline_code),
        airline_name: Set(payload.airline_name),
        color_code: Set(payload.color_code),
    }
    .insert(&state.db)
    .await?;

    info!("Created airline {}", airline.airline_code);

    Ok((StatusCode::CREATED, Json(airline.into())))
}

/// Seed the default airline catalog
///
/// Idempotent: codes already present are skipped and only newly inserted
/// rows are returned.
#[utoipa::path(
    post,
    path = "/airlines/init",
    responses(
        (status = 201, description = "Newly seeded airlines", body = [AirlineResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "airlines"
)]
pub async fn init_airlines(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<AirlineResponse>>), ApiError> {
    let created = seed::seed_airlines(&state.db).await?;

    Ok((
        StatusCode::CREATED,
        Json(created.into_iter().map(AirlineResponse::from).collect()),
    ))
}
