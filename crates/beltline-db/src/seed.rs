//! Idempotent reference-data seeding
//!
//! Both routines skip rows that already exist and return only what they
//! inserted, so calling them repeatedly is safe.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use tracing::info;

use crate::entities::{airline, carousel, prelude::*};

/// Default airline catalog: (code, name, brand color)
pub const DEFAULT_AIRLINES: [(&str, &str, &str); 8] = [
    ("KE", "Korean Air", "#0F4C81"),
    ("OZ", "Asiana Airlines", "#C9252D"),
    ("7C", "Jeju Air", "#FF6600"),
    ("TW", "T'way Air", "#E60012"),
    ("LJ", "Jin Air", "#FFD700"),
    ("ZE", "Eastar Jet", "#00A651"),
    ("BX", "Air Busan", "#FF6B35"),
    ("RS", "Air Seoul", "#003366"),
];

/// Number of carousels in the inventory, split evenly across two terminals
pub const CAROUSEL_COUNT: u32 = 24;

/// Insert the default airline catalog, skipping codes already present.
pub async fn seed_airlines(db: &DatabaseConnection) -> Result<Vec<airline::Model>, DbErr> {
    let mut created = Vec::new();

    for (code, name, color) in DEFAULT_AIRLINES {
        if Airline::find_by_id(code).one(db).await?.is_some() {
            continue;
        }

        let row = airline::ActiveModel {
            airline_code: Set(code.to_string()),
            airline_name: Set(name.to_string()),
            color_code: Set(color.to_string()),
        }
        .insert(db)
        .await?;

        created.push(row);
    }

    info!("Seeded {} airlines", created.len());
    Ok(created)
}

/// Insert carousels C1..C24, skipping identifiers already present.
///
/// C1..C12 sit in terminal T1, C13..C24 in T2; every unit starts with
/// capacity 100 and active status.
pub async fn seed_carousels(db: &DatabaseConnection) -> Result<Vec<carousel::Model>, DbErr> {
    let mut created = Vec::new();

    for i in 1..=CAROUSEL_COUNT {
        let carousel_id = format!("C{i}");
        if Carousel::find_by_id(&carousel_id).one(db).await?.is_some() {
            continue;
        }

        let terminal = if i <= CAROUSEL_COUNT / 2 { "T1" } else { "T2" };

        let row = carousel::ActiveModel {
            carousel_id: Set(carousel_id),
            terminal: Set(Some(terminal.to_string())),
            capacity: Set(100),
            is_active: Set(true),
        }
        .insert(db)
        .await?;

        created.push(row);
    }

    info!("Seeded {} carousels", created.len());
    Ok(created)
}
