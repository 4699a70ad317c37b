//! HTTP handlers, one module per entity

pub mod airlines;
pub mod assignments;
pub mod carousels;
pub mod flights;
pub mod system;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::error::ApiError;

/// `?date=YYYY-MM-DD` query shape shared by flight and assignment listings
#[derive(Debug, Deserialize)]
pub struct DateFilter {
    pub date: Option<String>,
}

/// Parse a `YYYY-MM-DD` filter into `[start-of-day, end-of-day)` bounds.
pub(crate) fn day_bounds(date: &str) -> Result<(NaiveDateTime, NaiveDateTime), ApiError> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("Invalid date format. Use YYYY-MM-DD".to_string()))?;

    let start = day.and_time(NaiveTime::MIN);
    Ok((start, start + Duration::days(1)))
}
