//! Assignment entity linking a flight to a carousel over a time window

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    /// Auto-increment primary key
    #[sea_orm(primary_key)]
    pub assignment_id: i32,

    /// Flight being assigned, references `flights.flight_id`
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub flight_id: String,

    /// Carousel receiving the flight, references `carousels.carousel_id`
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub carousel_id: String,

    /// Carousel occupation start
    pub start_time: DateTime,

    /// Carousel occupation end; no ordering constraint against `start_time`
    pub end_time: DateTime,

    /// "MANUAL" for operator entries, "AI" for imported plans
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub assignment_type: String,

    pub created_at: DateTime,

    /// Refreshed on every mutation
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::FlightId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Flight,

    #[sea_orm(
        belongs_to = "super::carousel::Entity",
        from = "Column::CarouselId",
        to = "super::carousel::Column::CarouselId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Carousel,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::carousel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Carousel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
