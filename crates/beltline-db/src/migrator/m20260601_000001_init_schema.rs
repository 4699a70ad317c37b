//! Initial schema: airlines, carousels, flights, assignments
//!
//! All foreign keys are RESTRICT on delete: removing a parent row with
//! dependents fails at the storage boundary instead of cascading.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // 1. Create airlines table
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Airline::Table)
                    .if_not_exists()
                    .col(string_len(Airline::AirlineCode, 10).primary_key())
                    .col(string_len(Airline::AirlineName, 100).not_null())
                    .col(
                        string_len(Airline::ColorCode, 7)
                            .not_null()
                            .default("#808080"),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 2. Create carousels table
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Carousel::Table)
                    .if_not_exists()
                    .col(string_len(Carousel::CarouselId, 10).primary_key())
                    .col(string_len(Carousel::Terminal, 10).null())
                    .col(integer(Carousel::Capacity).not_null().default(100))
                    .col(boolean(Carousel::IsActive).not_null().default(true))
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 3. Create flights table
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(string_len(Flight::FlightId, 20).primary_key())
                    .col(string_len(Flight::Airline, 10).not_null())
                    .col(string_len(Flight::FlightNumber, 10).not_null())
                    .col(timestamp(Flight::ScheduledTime).not_null())
                    .col(integer(Flight::PaxCount).not_null().default(0))
                    .col(integer(Flight::BaggageCount).not_null().default(0))
                    .col(string_len(Flight::AircraftType, 20).null())
                    .col(
                        timestamp(Flight::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flights_airline")
                            .from(Flight::Table, Flight::Airline)
                            .to(Airline::Table, Airline::AirlineCode)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_flights_airline")
                    .table(Flight::Table)
                    .col(Flight::Airline)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_flights_scheduled_time")
                    .table(Flight::Table)
                    .col(Flight::ScheduledTime)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 4. Create assignments table
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(pk_auto(Assignment::AssignmentId))
                    .col(string_len(Assignment::FlightId, 20).not_null())
                    .col(string_len(Assignment::CarouselId, 10).not_null())
                    .col(timestamp(Assignment::StartTime).not_null())
                    .col(timestamp(Assignment::EndTime).not_null())
                    .col(
                        string_len(Assignment::AssignmentType, 10)
                            .not_null()
                            .default("MANUAL"),
                    )
                    .col(
                        timestamp(Assignment::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(Assignment::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_flight_id")
                            .from(Assignment::Table, Assignment::FlightId)
                            .to(Flight::Table, Flight::FlightId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_carousel_id")
                            .from(Assignment::Table, Assignment::CarouselId)
                            .to(Carousel::Table, Carousel::CarouselId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_flight_id")
                    .table(Assignment::Table)
                    .col(Assignment::FlightId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_carousel_id")
                    .table(Assignment::Table)
                    .col(Assignment::CarouselId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_start_time")
                    .table(Assignment::Table)
                    .col(Assignment::StartTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Carousel::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Airline::Table).to_owned())
            .await?;

        Ok(())
    }
}

// ============================================================
// Table identifiers
// ============================================================

#[derive(DeriveIden)]
enum Airline {
    #[sea_orm(iden = "airlines")]
    Table,
    AirlineCode,
    AirlineName,
    ColorCode,
}

#[derive(DeriveIden)]
enum Carousel {
    #[sea_orm(iden = "carousels")]
    Table,
    CarouselId,
    Terminal,
    Capacity,
    IsActive,
}

#[derive(DeriveIden)]
enum Flight {
    #[sea_orm(iden = "flights")]
    Table,
    FlightId,
    Airline,
    FlightNumber,
    ScheduledTime,
    PaxCount,
    BaggageCount,
    AircraftType,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assignment {
    #[sea_orm(iden = "assignments")]
    Table,
    AssignmentId,
    FlightId,
    CarouselId,
    StartTime,
    EndTime,
    AssignmentType,
    CreatedAt,
    UpdatedAt,
}
