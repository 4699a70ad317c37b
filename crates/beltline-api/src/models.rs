//! Request and response shapes with field-level validation
//!
//! Create shapes default their optional fields, update shapes carry only the
//! fields the caller supplied, response shapes mirror the persisted rows.
//! `validate()` runs before any storage access.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use beltline_db::entities::{airline, assignment, carousel, flight};

use crate::error::ApiError;

/// Structured error payload returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure reason
    pub error: String,
    /// Stable machine-readable code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Root endpoint payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub service: String,
    pub status: String,
    pub version: String,
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

// ============================================================
// Airlines
// ============================================================

/// Request to create an airline
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAirlineRequest {
    /// Carrier code, e.g. "KE"
    pub airline_code: String,
    /// Full carrier name, e.g. "Korean Air"
    pub airline_name: String,
    /// Hex display color used for flight bars in the UI
    #[serde(default = "default_color_code")]
    pub color_code: String,
}

impl CreateAirlineRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_max_len("airline_code", &self.airline_code, 10)?;
        check_max_len("airline_name", &self.airline_name, 100)?;
        check_color_code(&self.color_code)
    }
}

/// Airline record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirlineResponse {
    pub airline_code: String,
    pub airline_name: String,
    pub color_code: String,
}

impl From<airline::Model> for AirlineResponse {
    fn from(model: airline::Model) -> Self {
        Self {
            airline_code: model.airline_code,
            airline_name: model.airline_name,
            color_code: model.color_code,
        }
    }
}

// ============================================================
// Carousels
// ============================================================

/// Request to create a carousel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCarouselRequest {
    /// Carousel identifier, e.g. "C1"
    pub carousel_id: String,
    /// Terminal the carousel sits in, e.g. "T1"
    #[serde(default)]
    pub terminal: Option<String>,
    /// Bag capacity of the unit
    #[serde(default = "default_capacity")]
    pub capacity: i32,
    /// Whether the carousel accepts new assignments
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateCarouselRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_max_len("carousel_id", &self.carousel_id, 10)?;
        if let Some(ref terminal) = self.terminal {
            check_max_len("terminal", terminal, 10)?;
        }
        check_non_negative("capacity", self.capacity)
    }
}

/// Partial carousel update; only supplied fields are applied
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCarouselRequest {
    /// Omitted = unchanged; explicit null clears the terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub terminal: Option<Option<String>>,
    pub capacity: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateCarouselRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(Some(ref terminal)) = self.terminal {
            check_max_len("terminal", terminal, 10)?;
        }
        if let Some(capacity) = self.capacity {
            check_non_negative("capacity", capacity)?;
        }
        Ok(())
    }
}

/// Carousel record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarouselResponse {
    pub carousel_id: String,
    pub terminal: Option<String>,
    pub capacity: i32,
    pub is_active: bool,
}

impl From<carousel::Model> for CarouselResponse {
    fn from(model: carousel::Model) -> Self {
        Self {
            carousel_id: model.carousel_id,
            terminal: model.terminal,
            capacity: model.capacity,
            is_active: model.is_active,
        }
    }
}

// ============================================================
// Flights
// ============================================================

/// Request to create an arrival flight
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFlightRequest {
    /// Unique flight identifier, e.g. "KE001_20251215"
    pub flight_id: String,
    /// Carrier code, must reference an existing airline
    pub airline: String,
    /// Flight number without the carrier prefix, e.g. "001"
    pub flight_number: String,
    /// Scheduled arrival time
    pub scheduled_time: NaiveDateTime,
    /// Passenger count
    #[serde(default)]
    pub pax_count: i32,
    /// Checked baggage count
    #[serde(default)]
    pub baggage_count: i32,
    /// Aircraft type, e.g. "B737"
    #[serde(default)]
    pub aircraft_type: Option<String>,
}

impl CreateFlightRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_max_len("flight_id", &self.flight_id, 20)?;
        check_max_len("airline", &self.airline, 10)?;
        check_max_len("flight_number", &self.flight_number, 10)?;
        if let Some(ref aircraft_type) = self.aircraft_type {
            check_max_len("aircraft_type", aircraft_type, 20)?;
        }
        check_non_negative("pax_count", self.pax_count)?;
        check_non_negative("baggage_count", self.baggage_count)
    }
}

/// Flight record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightResponse {
    pub flight_id: String,
    pub airline: String,
    pub flight_number: String,
    pub scheduled_time: NaiveDateTime,
    pub pax_count: i32,
    pub baggage_count: i32,
    pub aircraft_type: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<flight::Model> for FlightResponse {
    fn from(model: flight::Model) -> Self {
        Self {
            flight_id: model.flight_id,
            airline: model.airline,
            flight_number: model.flight_number,
            scheduled_time: model.scheduled_time,
            pax_count: model.pax_count,
            baggage_count: model.baggage_count,
            aircraft_type: model.aircraft_type,
            created_at: model.created_at,
        }
    }
}

/// Flight record with its airline joined in
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightWithAirlineResponse {
    pub flight_id: String,
    pub airline: String,
    pub flight_number: String,
    pub scheduled_time: NaiveDateTime,
    pub pax_count: i32,
    pub baggage_count: i32,
    pub aircraft_type: Option<String>,
    pub created_at: NaiveDateTime,
    /// Airline record referenced by `airline`
    pub airline_info: Option<AirlineResponse>,
}

impl From<(flight::Model, Option<airline::Model>)> for FlightWithAirlineResponse {
    fn from((flight, airline): (flight::Model, Option<airline::Model>)) -> Self {
        Self {
            flight_id: flight.flight_id,
            airline: flight.airline,
            flight_number: flight.flight_number,
            scheduled_time: flight.scheduled_time,
            pax_count: flight.pax_count,
            baggage_count: flight.baggage_count,
            aircraft_type: flight.aircraft_type,
            created_at: flight.created_at,
            airline_info: airline.map(AirlineResponse::from),
        }
    }
}

// ============================================================
// Assignments
// ============================================================

/// Request to assign a flight to a carousel over a time window
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAssignmentRequest {
    /// Flight being assigned, must reference an existing flight
    pub flight_id: String,
    /// Target carousel, must exist and be active
    pub carousel_id: String,
    /// Carousel occupation start
    pub start_time: NaiveDateTime,
    /// Carousel occupation end
    pub end_time: NaiveDateTime,
    /// "MANUAL" for operator entries, "AI" for imported plans
    #[serde(default = "default_assignment_type")]
    pub assignment_type: String,
}

impl CreateAssignmentRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_max_len("flight_id", &self.flight_id, 20)?;
        check_max_len("carousel_id", &self.carousel_id, 10)?;
        check_max_len("assignment_type", &self.assignment_type, 10)
    }
}

/// Partial assignment update; only supplied fields are applied.
///
/// The flight reference is immutable once created; re-assigning a flight
/// means deleting and recreating the record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAssignmentRequest {
    /// New target carousel, must exist and be active
    pub carousel_id: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub assignment_type: Option<String>,
}

impl UpdateAssignmentRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(ref carousel_id) = self.carousel_id {
            check_max_len("carousel_id", carousel_id, 10)?;
        }
        if let Some(ref assignment_type) = self.assignment_type {
            check_max_len("assignment_type", assignment_type, 10)?;
        }
        Ok(())
    }
}

/// Assignment record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponse {
    pub assignment_id: i32,
    pub flight_id: String,
    pub carousel_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub assignment_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<assignment::Model> for AssignmentResponse {
    fn from(model: assignment::Model) -> Self {
        Self {
            assignment_id: model.assignment_id,
            flight_id: model.flight_id,
            carousel_id: model.carousel_id,
            start_time: model.start_time,
            end_time: model.end_time,
            assignment_type: model.assignment_type,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Assignment record with its flight and carousel joined in
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentWithDetailsResponse {
    pub assignment_id: i32,
    pub flight_id: String,
    pub carousel_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub assignment_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Flight record referenced by `flight_id`
    pub flight: Option<FlightResponse>,
    /// Carousel record referenced by `carousel_id`
    pub carousel: Option<CarouselResponse>,
}

type AssignmentWithDetails = (
    assignment::Model,
    Option<flight::Model>,
    Option<carousel::Model>,
);

impl From<AssignmentWithDetails> for AssignmentWithDetailsResponse {
    fn from((assignment, flight, carousel): AssignmentWithDetails) -> Self {
        Self {
            assignment_id: assignment.assignment_id,
            flight_id: assignment.flight_id,
            carousel_id: assignment.carousel_id,
            start_time: assignment.start_time,
            end_time: assignment.end_time,
            assignment_type: assignment.assignment_type,
            created_at: assignment.created_at,
            updated_at: assignment.updated_at,
            flight: flight.map(FlightResponse::from),
            carousel: carousel.map(CarouselResponse::from),
        }
    }
}

// ============================================================
// Defaults and field checks
// ============================================================

fn default_color_code() -> String {
    "#808080".to_string()
}

fn default_capacity() -> i32 {
    100
}

fn default_true() -> bool {
    true
}

fn default_assignment_type() -> String {
    "MANUAL".to_string()
}

fn check_max_len(field: &str, value: &str, max: usize) -> Result<(), ApiError> {
    if value.chars().count() > max {
        return Err(ApiError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: i32) -> Result<(), ApiError> {
    if value < 0 {
        return Err(ApiError::Validation(format!(
            "{field} must be non-negative"
        )));
    }
    Ok(())
}

/// Accepts "#RGB" and "#RRGGBB" shaped values
fn check_color_code(value: &str) -> Result<(), ApiError> {
    let valid = value
        .strip_prefix('#')
        .map(|digits| {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
        .unwrap_or(false);

    if !valid {
        return Err(ApiError::Validation(
            "color_code must be a hex color like #808080".to_string(),
        ));
    }
    Ok(())
}
