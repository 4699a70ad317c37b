//! Flight endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

use beltline_db::entities::{flight, prelude::*};

use crate::error::ApiError;
use crate::handlers::{day_bounds, DateFilter};
use crate::models::{
    CreateFlightRequest, ErrorResponse, FlightResponse, FlightWithAirlineResponse,
};
use crate::AppState;

/// List flights with their airline info, optionally filtered by calendar day
#[utoipa::path(
    get,
    path = "/flights",
    params(
        ("date" = Option<String>, Query, description = "Filter by date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "List of flights", body = [FlightWithAirlineResponse]),
        (status = 400, description = "Invalid date filter", body = ErrorResponse)
    ),
    tag = "flights"
)]
pub async fn list_flights(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<DateFilter>,
) -> Result<Json<Vec<FlightWithAirlineResponse>>, ApiError> {
    debug!("Listing flights with filter: {:?}", filter);

    let mut query = Flight::find().find_also_related(Airline);

    if let Some(ref date) = filter.date {
        let (start, end) = day_bounds(date)?;
        query = query
            .filter(flight::Column::ScheduledTime.gte(start))
            .filter(flight::Column::ScheduledTime.lt(end));
    }

    let rows = query.all(&state.db).await?;

    Ok(Json(
        rows.into_iter()
            .map(FlightWithAirlineResponse::from)
            .collect(),
    ))
}

/// Get a specific flight by ID, with its airline info
#[utoipa::path(
    get,
    path = "/flights/{flight_id}",
    params(
        ("flight_id" = String, Path, description = "Flight identifier")
    ),
    responses(
        (status = 200, description = "Flight record", body = FlightWithAirlineResponse),
        (status = 404, description = "Flight not found", body = ErrorResponse)
    ),
    tag = "flights"
)]
pub async fn get_flight(
    State(state): State<Arc<AppState>>,
    Path(flight_id): Path<String>,
) -> Result<Json<FlightWithAirlineResponse>, ApiError> {
    debug!("Getting flight: {}", flight_id);

    let row = Flight::find_by_id(&flight_id)
        .find_also_related(Airline)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Flight not found".to_string()))?;

    Ok(Json(row.into()))
}

/// Create a new flight
#[utoipa::path(
    post,
    path = "/flights",
    request_body = CreateFlightRequest,
    responses(
        (status = 201, description = "Flight created", body = FlightResponse),
        (status = 400, description = "Invalid payload, unknown airline, or flight already exists", body = ErrorResponse)
    ),
    tag = "flights"
)]
pub async fn create_flight(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateFlightRequest>,
) -> Result<(StatusCode, Json<FlightResponse>), ApiError> {
    payload.validate()?;

    if Flight::find_by_id(&payload.flight_id)
        .one(&state.db)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Flight already exists".to_string()));
    }

    if Airline::find_by_id(&payload.airline)
        .one(&state.db)
        .await?
        .is_none()
    {
        return Err(ApiError::Validation(format!(
            "Airline '{}' not found",
            payload.airline
        )));
    }

    let flight = flight::ActiveModel {
        flight_id: Set(payload.flight_id),
        airline: Set(payload.airline),
        flight_number: Set(payload.flight_number),
        scheduled_time: Set(payload.scheduled_time),
        pax_count: Set(payload.pax_count),
        baggage_count: Set(payload.baggage_count),
        aircraft_type: Set(payload.aircraft_type),
        created_at: Set(Utc::now().naive_utc()),
    }
    .insert(&state.db)
    .await?;

    info!("Created flight {}", flight.flight_id);

    Ok((StatusCode::CREATED, Json(flight.into())))
}

/// Bulk upload flights
///
/// Payloads whose identifier already exists (in the store or earlier in the
/// same batch) are silently skipped. The surviving inserts run in one
/// transaction, so a storage failure leaves nothing behind. Returns only the
/// newly created rows.
#[utoipa::path(
    post,
    path = "/flights/upload",
    request_body = [CreateFlightRequest],
    responses(
        (status = 201, description = "Newly created flights", body = [FlightResponse]),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    ),
    tag = "flights"
)]
pub async fn upload_flights(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Vec<CreateFlightRequest>>,
) -> Result<(StatusCode, Json<Vec<FlightResponse>>), ApiError> {
    debug!("Bulk uploading {} flights", payload.len());

    for flight in &payload {
        flight.validate()?;
    }

    let txn = state.db.begin().await?;

    let mut seen = HashSet::new();
    let mut created = Vec::new();

    for flight in payload {
        if !seen.insert(flight.flight_id.clone()) {
            continue;
        }
        if Flight::find_by_id(&flight.flight_id)
            .one(&txn)
            .await?
            .is_some()
        {
            continue;
        }

        let row = flight::ActiveModel {
            flight_id: Set(flight.flight_id),
            airline: Set(flight.airline),
            flight_number: Set(flight.flight_number),
            scheduled_time: Set(flight.scheduled_time),
            pax_count: Set(flight.pax_count),
            baggage_count: Set(flight.baggage_count),
            aircraft_type: Set(flight.aircraft_type),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(&txn)
        .await?;

        created.push(row);
    }

    txn.commit().await?;

    info!("Bulk upload created {} flights", created.len());

    Ok((
        StatusCode::CREATED,
        Json(created.into_iter().map(FlightResponse::from).collect()),
    ))
}

/// Delete a flight
#[utoipa::path(
    delete,
    path = "/flights/{flight_id}",
    params(
        ("flight_id" = String, Path, description = "Flight identifier")
    ),
    responses(
        (status = 204, description = "Flight deleted"),
        (status = 404, description = "Flight not found", body = ErrorResponse)
    ),
    tag = "flights"
)]
pub async fn delete_flight(
    State(state): State<Arc<AppState>>,
    Path(flight_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting flight: {}", flight_id);

    let flight = Flight::find_by_id(&flight_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Flight not found".to_string()))?;

    flight.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
