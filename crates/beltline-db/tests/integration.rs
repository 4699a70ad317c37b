//! Integration tests for beltline-db
//!
//! Tests database operations with a real SQLite in-memory database

use beltline_db::{
    connect,
    entities::{airline, assignment, carousel, flight, prelude::*},
    migrate, seed,
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, Set,
};

/// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    let db = connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    migrate(&db).await.expect("Failed to run migrations");

    db
}

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

async fn insert_airline(db: &DatabaseConnection, code: &str) -> airline::Model {
    airline::ActiveModel {
        airline_code: Set(code.to_string()),
        airline_name: Set(format!("{code} Airlines")),
        color_code: Set("#0F4C81".to_string()),
    }
    .insert(db)
    .await
    .expect("Failed to insert airline")
}

async fn insert_carousel(db: &DatabaseConnection, id: &str, is_active: bool) -> carousel::Model {
    carousel::ActiveModel {
        carousel_id: Set(id.to_string()),
        terminal: Set(Some("T1".to_string())),
        capacity: Set(100),
        is_active: Set(is_active),
    }
    .insert(db)
    .await
    .expect("Failed to insert carousel")
}

async fn insert_flight(db: &DatabaseConnection, id: &str, airline_code: &str) -> flight::Model {
    flight::ActiveModel {
        flight_id: Set(id.to_string()),
        airline: Set(airline_code.to_string()),
        flight_number: Set("001".to_string()),
        scheduled_time: Set(dt(2025, 12, 15, 14, 30)),
        pax_count: Set(180),
        baggage_count: Set(250),
        aircraft_type: Set(Some("B737".to_string())),
        created_at: Set(dt(2025, 12, 1, 9, 0)),
    }
    .insert(db)
    .await
    .expect("Failed to insert flight")
}

async fn insert_assignment(
    db: &DatabaseConnection,
    flight_id: &str,
    carousel_id: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> assignment::Model {
    assignment::ActiveModel {
        flight_id: Set(flight_id.to_string()),
        carousel_id: Set(carousel_id.to_string()),
        start_time: Set(start),
        end_time: Set(end),
        assignment_type: Set("MANUAL".to_string()),
        created_at: Set(dt(2025, 12, 1, 9, 0)),
        updated_at: Set(dt(2025, 12, 1, 9, 0)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert assignment")
}

#[tokio::test]
async fn test_database_connection() {
    let db = connect("sqlite::memory:").await.expect("Failed to connect");

    let backend = db.get_database_backend();
    assert!(matches!(backend, sea_orm::DatabaseBackend::Sqlite));
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = connect("sqlite::memory:").await.expect("Failed to connect");

    migrate(&db).await.expect("First migration run failed");
    migrate(&db)
        .await
        .expect("Re-running migrations must be a no-op");
}

#[tokio::test]
async fn test_create_and_read_airline() {
    let db = setup_test_db().await;

    let inserted = insert_airline(&db, "KE").await;
    assert_eq!(inserted.airline_code, "KE");

    let found = Airline::find_by_id("KE")
        .one(&db)
        .await
        .expect("Failed to query")
        .expect("Airline not found");

    assert_eq!(found.airline_name, "KE Airlines");
    assert_eq!(found.color_code, "#0F4C81");
}

#[tokio::test]
async fn test_update_carousel_fields() {
    let db = setup_test_db().await;

    let carousel = insert_carousel(&db, "C1", true).await;

    let mut active: carousel::ActiveModel = carousel.into();
    active.capacity = Set(50);
    active.is_active = Set(false);

    let updated = active.update(&db).await.expect("Failed to update");

    assert_eq!(updated.capacity, 50);
    assert!(!updated.is_active);
    // Untouched fields keep their values
    assert_eq!(updated.terminal, Some("T1".to_string()));
}

#[tokio::test]
async fn test_flight_requires_existing_airline() {
    let db = setup_test_db().await;

    let result = flight::ActiveModel {
        flight_id: Set("XX999_20251215".to_string()),
        airline: Set("XX".to_string()),
        flight_number: Set("999".to_string()),
        scheduled_time: Set(dt(2025, 12, 15, 14, 30)),
        pax_count: Set(0),
        baggage_count: Set(0),
        aircraft_type: Set(None),
        created_at: Set(dt(2025, 12, 1, 9, 0)),
    }
    .insert(&db)
    .await;

    assert!(result.is_err(), "insert without parent airline must fail");
}

#[tokio::test]
async fn test_assignment_ids_are_server_assigned() {
    let db = setup_test_db().await;

    insert_airline(&db, "KE").await;
    insert_carousel(&db, "C1", true).await;
    insert_flight(&db, "KE001_20251215", "KE").await;

    let first = insert_assignment(
        &db,
        "KE001_20251215",
        "C1",
        dt(2025, 12, 15, 14, 30),
        dt(2025, 12, 15, 15, 0),
    )
    .await;
    let second = insert_assignment(
        &db,
        "KE001_20251215",
        "C1",
        dt(2025, 12, 15, 16, 0),
        dt(2025, 12, 15, 16, 30),
    )
    .await;

    assert!(second.assignment_id > first.assignment_id);
}

#[tokio::test]
async fn test_overlapping_assignments_are_permitted() {
    // Known boundary: nothing prevents double-booking a carousel
    let db = setup_test_db().await;

    insert_airline(&db, "KE").await;
    insert_airline(&db, "OZ").await;
    insert_carousel(&db, "C1", true).await;
    insert_flight(&db, "KE001_20251215", "KE").await;
    insert_flight(&db, "OZ302_20251215", "OZ").await;

    insert_assignment(
        &db,
        "KE001_20251215",
        "C1",
        dt(2025, 12, 15, 14, 30),
        dt(2025, 12, 15, 15, 30),
    )
    .await;
    insert_assignment(
        &db,
        "OZ302_20251215",
        "C1",
        dt(2025, 12, 15, 15, 0),
        dt(2025, 12, 15, 16, 0),
    )
    .await;

    let count = Assignment::find()
        .filter(assignment::Column::CarouselId.eq("C1"))
        .count(&db)
        .await
        .expect("Failed to count");

    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_delete_airline_with_flights_is_restricted() {
    let db = setup_test_db().await;

    let airline = insert_airline(&db, "KE").await;
    insert_flight(&db, "KE001_20251215", "KE").await;

    let result = airline.delete(&db).await;
    assert!(result.is_err(), "delete with dependent flights must fail");
}

#[tokio::test]
async fn test_delete_flight_with_assignments_is_restricted() {
    let db = setup_test_db().await;

    insert_airline(&db, "KE").await;
    insert_carousel(&db, "C1", true).await;
    let flight = insert_flight(&db, "KE001_20251215", "KE").await;
    insert_assignment(
        &db,
        "KE001_20251215",
        "C1",
        dt(2025, 12, 15, 14, 30),
        dt(2025, 12, 15, 15, 0),
    )
    .await;

    let result = flight.delete(&db).await;
    assert!(
        result.is_err(),
        "delete with dependent assignments must fail"
    );
}

#[tokio::test]
async fn test_delete_assignment_then_flight() {
    let db = setup_test_db().await;

    insert_airline(&db, "KE").await;
    insert_carousel(&db, "C1", true).await;
    let flight = insert_flight(&db, "KE001_20251215", "KE").await;
    let assignment = insert_assignment(
        &db,
        "KE001_20251215",
        "C1",
        dt(2025, 12, 15, 14, 30),
        dt(2025, 12, 15, 15, 0),
    )
    .await;

    assignment.delete(&db).await.expect("Failed to delete");
    flight.delete(&db).await.expect("Failed to delete");

    let remaining = Flight::find()
        .count(&db)
        .await
        .expect("Failed to count");
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_query_flights_by_time_window() {
    let db = setup_test_db().await;

    insert_airline(&db, "KE").await;

    for (id, time) in [
        ("KE001_20251215", dt(2025, 12, 15, 8, 0)),
        ("KE002_20251215", dt(2025, 12, 15, 23, 45)),
        ("KE003_20251216", dt(2025, 12, 16, 0, 0)),
    ] {
        flight::ActiveModel {
            flight_id: Set(id.to_string()),
            airline: Set("KE".to_string()),
            flight_number: Set("001".to_string()),
            scheduled_time: Set(time),
            pax_count: Set(0),
            baggage_count: Set(0),
            aircraft_type: Set(None),
            created_at: Set(dt(2025, 12, 1, 9, 0)),
        }
        .insert(&db)
        .await
        .expect("Failed to insert flight");
    }

    let day = Flight::find()
        .filter(flight::Column::ScheduledTime.gte(dt(2025, 12, 15, 0, 0)))
        .filter(flight::Column::ScheduledTime.lt(dt(2025, 12, 16, 0, 0)))
        .all(&db)
        .await
        .expect("Failed to query");

    assert_eq!(day.len(), 2);
    assert!(day.iter().all(|f| f.flight_id.ends_with("_20251215")));
}

#[tokio::test]
async fn test_seed_airlines_is_idempotent() {
    let db = setup_test_db().await;

    let first = seed::seed_airlines(&db).await.expect("First seed failed");
    assert_eq!(first.len(), 8);

    let second = seed::seed_airlines(&db).await.expect("Second seed failed");
    assert!(second.is_empty());

    let total = Airline::find().count(&db).await.expect("Failed to count");
    assert_eq!(total, 8);
}

#[tokio::test]
async fn test_seed_airlines_skips_existing_rows() {
    let db = setup_test_db().await;

    // Pre-existing row keeps its data and is not reported as created
    airline::ActiveModel {
        airline_code: Set("KE".to_string()),
        airline_name: Set("Custom Name".to_string()),
        color_code: Set("#000000".to_string()),
    }
    .insert(&db)
    .await
    .expect("Failed to insert airline");

    let created = seed::seed_airlines(&db).await.expect("Seed failed");
    assert_eq!(created.len(), 7);
    assert!(created.iter().all(|a| a.airline_code != "KE"));

    let ke = Airline::find_by_id("KE")
        .one(&db)
        .await
        .expect("Failed to query")
        .expect("Airline not found");
    assert_eq!(ke.airline_name, "Custom Name");
}

#[tokio::test]
async fn test_seed_carousels_layout() {
    let db = setup_test_db().await;

    let created = seed::seed_carousels(&db).await.expect("Seed failed");
    assert_eq!(created.len(), 24);

    let second = seed::seed_carousels(&db).await.expect("Second seed failed");
    assert!(second.is_empty());

    let total = Carousel::find().count(&db).await.expect("Failed to count");
    assert_eq!(total, 24);

    // C1..C12 sit in T1, C13..C24 in T2
    let c12 = Carousel::find_by_id("C12")
        .one(&db)
        .await
        .expect("Failed to query")
        .expect("Carousel not found");
    assert_eq!(c12.terminal, Some("T1".to_string()));

    let c13 = Carousel::find_by_id("C13")
        .one(&db)
        .await
        .expect("Failed to query")
        .expect("Carousel not found");
    assert_eq!(c13.terminal, Some("T2".to_string()));

    assert!(created.iter().all(|c| c.capacity == 100 && c.is_active));
}
