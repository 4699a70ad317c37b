//! Airline entity for carrier reference data and UI display colors

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "airlines")]
pub struct Model {
    /// Carrier code, e.g. "KE" or "7C" (primary key)
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(10))")]
    pub airline_code: String,

    /// Full carrier name, e.g. "Korean Air"
    pub airline_name: String,

    /// Hex color used for flight bars in the UI, e.g. "#0F4C81"
    #[sea_orm(column_type = "String(StringLen::N(7))")]
    pub color_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
