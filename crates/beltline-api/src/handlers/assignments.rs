//! Assignment endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use beltline_db::entities::{assignment, carousel, flight, prelude::*};

use crate::error::ApiError;
use crate::handlers::{day_bounds, DateFilter};
use crate::models::{
    AssignmentResponse, AssignmentWithDetailsResponse, CreateAssignmentRequest, ErrorResponse,
    UpdateAssignmentRequest,
};
use crate::AppState;

/// List assignments with flight and carousel info, optionally filtered by
/// calendar day of the start time
#[utoipa::path(
    get,
    path = "/assignments",
    params(
        ("date" = Option<String>, Query, description = "Filter by date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "List of assignments", body = [AssignmentWithDetailsResponse]),
        (status = 400, description = "Invalid date filter", body = ErrorResponse)
    ),
    tag = "assignments"
)]
pub async fn list_assignments(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<DateFilter>,
) -> Result<Json<Vec<AssignmentWithDetailsResponse>>, ApiError> {
    debug!("Listing assignments with filter: {:?}", filter);

    let mut query = Assignment::find();

    if let Some(ref date) = filter.date {
        let (start, end) = day_bounds(date)?;
        query = query
            .filter(assignment::Column::StartTime.gte(start))
            .filter(assignment::Column::StartTime.lt(end));
    }

    let assignments = query.all(&state.db).await?;

    // Batch-load the referenced rows instead of querying per assignment
    let flight_ids: Vec<String> = assignments.iter().map(|a| a.flight_id.clone()).collect();
    let carousel_ids: Vec<String> = assignments.iter().map(|a| a.carousel_id.clone()).collect();

    let flights: HashMap<String, flight::Model> = Flight::find()
        .filter(flight::Column::FlightId.is_in(flight_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|f| (f.flight_id.clone(), f))
        .collect();

    let carousels: HashMap<String, carousel::Model> = Carousel::find()
        .filter(carousel::Column::CarouselId.is_in(carousel_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|c| (c.carousel_id.clone(), c))
        .collect();

    let rows = assignments
        .into_iter()
        .map(|a| {
            let flight = flights.get(&a.flight_id).cloned();
            let carousel = carousels.get(&a.carousel_id).cloned();
            AssignmentWithDetailsResponse::from((a, flight, carousel))
        })
        .collect();

    Ok(Json(rows))
}

/// Get a specific assignment by ID, with flight and carousel info
#[utoipa::path(
    get,
    path = "/assignments/{assignment_id}",
    params(
        ("assignment_id" = i32, Path, description = "Assignment identifier")
    ),
    responses(
        (status = 200, description = "Assignment record", body = AssignmentWithDetailsResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
    tag = "assignments"
)]
pub async fn get_assignment(
    State(state): State<Arc<AppState>>,
    Path(assignment_id): Path<i32>,
) -> Result<Json<AssignmentWithDetailsResponse>, ApiError> {
    debug!("Getting assignment: {}", assignment_id);

    let assignment = Assignment::find_by_id(assignment_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assignment not found".to_string()))?;

    let flight = assignment.find_related(Flight).one(&state.db).await?;
    let carousel = assignment.find_related(Carousel).one(&state.db).await?;

    Ok(Json((assignment, flight, carousel).into()))
}

/// Create a new assignment
#[utoipa::path(
    post,
    path = "/assignments",
    request_body = CreateAssignmentRequest,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentResponse),
        (status = 400, description = "Unknown flight or carousel, or carousel inactive", body = ErrorResponse)
    ),
    tag = "assignments"
)]
pub async fn create_assignment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<AssignmentResponse>), ApiError> {
    payload.validate()?;

    if Flight::find_by_id(&payload.flight_id)
        .one(&state.db)
        .await?
        .is_none()
    {
        return Err(ApiError::Validation("Flight not found".to_string()));
    }

    let carousel = Carousel::find_by_id(&payload.carousel_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::Validation("Carousel not found".to_string()))?;

    if !carousel.is_active {
        return Err(ApiError::Validation("Carousel is not active".to_string()));
    }

    let now = Utc::now().naive_utc();
    let assignment = assignment::ActiveModel {
        flight_id: Set(payload.flight_id),
        carousel_id: Set(payload.carousel_id),
        start_time: Set(payload.start_time),
        end_time: Set(payload.end_time),
        assignment_type: Set(payload.assignment_type),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(
        "Created assignment {}: {} -> {}",
        assignment.assignment_id, assignment.flight_id, assignment.carousel_id
    );

    Ok((StatusCode::CREATED, Json(assignment.into())))
}

/// Update an assignment (manual adjustments)
///
/// Only the supplied fields are applied. Moving the assignment to another
/// carousel re-validates that the target exists and is active before any
/// field is written.
#[utoipa::path(
    put,
    path = "/assignments/{assignment_id}",
    params(
        ("assignment_id" = i32, Path, description = "Assignment identifier")
    ),
    request_body = UpdateAssignmentRequest,
    responses(
        (status = 200, description = "Updated assignment", body = AssignmentResponse),
        (status = 400, description = "Unknown or inactive target carousel", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
    tag = "assignments"
)]
pub async fn update_assignment(
    State(state): State<Arc<AppState>>,
    Path(assignment_id): Path<i32>,
    Json(payload): Json<UpdateAssignmentRequest>,
) -> Result<Json<AssignmentResponse>, ApiError> {
    payload.validate()?;

    let assignment = Assignment::find_by_id(assignment_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assignment not found".to_string()))?;

    if let Some(ref carousel_id) = payload.carousel_id {
        let carousel = Carousel::find_by_id(carousel_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::Validation("Carousel not found".to_string()))?;

        if !carousel.is_active {
            return Err(ApiError::Validation("Carousel is not active".to_string()));
        }
    }

    let mut active: assignment::ActiveModel = assignment.into();
    if let Some(carousel_id) = payload.carousel_id {
        active.carousel_id = Set(carousel_id);
    }
    if let Some(start_time) = payload.start_time {
        active.start_time = Set(start_time);
    }
    if let Some(end_time) = payload.end_time {
        active.end_time = Set(end_time);
    }
    if let Some(assignment_type) = payload.assignment_type {
        active.assignment_type = Set(assignment_type);
    }
    active.updated_at = Set(Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;

    info!("Updated assignment {}", updated.assignment_id);

    Ok(Json(updated.into()))
}

/// Delete an assignment
#[utoipa::path(
    delete,
    path = "/assignments/{assignment_id}",
    params(
        ("assignment_id" = i32, Path, description = "Assignment identifier")
    ),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
    tag = "assignments"
)]
pub async fn delete_assignment(
    State(state): State<Arc<AppState>>,
    Path(assignment_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting assignment: {}", assignment_id);

    let assignment = Assignment::find_by_id(assignment_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Assignment not found".to_string()))?;

    assignment.delete(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
