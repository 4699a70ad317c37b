//! Flight entity for arrival flight records

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    /// Unique flight identifier, e.g. "KE001_20251215" (primary key)
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(20))")]
    pub flight_id: String,

    /// Carrier code, references `airlines.airline_code`
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub airline: String,

    /// Flight number without the carrier prefix, e.g. "001"
    pub flight_number: String,

    /// Scheduled arrival time
    pub scheduled_time: DateTime,

    /// Passenger count
    pub pax_count: i32,

    /// Checked baggage count
    pub baggage_count: i32,

    /// Aircraft type, e.g. "B737" or "A380"
    pub aircraft_type: Option<String>,

    /// Record creation timestamp, immutable after insert
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airline::Entity",
        from = "Column::Airline",
        to = "super::airline::Column::AirlineCode",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Airline,

    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::airline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airline.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
