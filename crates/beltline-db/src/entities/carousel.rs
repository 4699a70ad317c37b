//! Carousel entity for the baggage-claim unit inventory

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "carousels")]
pub struct Model {
    /// Carousel identifier, e.g. "C1" .. "C24" (primary key)
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(10))")]
    pub carousel_id: String,

    /// Terminal the carousel sits in, e.g. "T1"
    pub terminal: Option<String>,

    /// Bag capacity of the unit
    pub capacity: i32,

    /// Whether the carousel is currently operational; inactive carousels
    /// reject new assignments
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
