//! OpeningHours entity

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DayOfWeek {
    #[sea_orm(string_value = "MONDAY")]
    Monday,
    #[sea_orm(string_value = "TUESDAY")]
    Tuesday,
    #[sea_orm(string_value = "WEDNESDAY")]
    Wednesday,
    #[sea_orm(string_value = "THURSDAY")]
    Thursday,
    #[sea_orm(string_value = "FRIDAY")]
    Friday,
    #[sea_orm(string_value = "SATURDAY")]
    Saturday,
    #[sea_orm(string_value = "SUNDAY")]
    Sunday,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "opening_hours")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub poi_id: String,

    /// Index of the entry in the schedule as it was submitted
    pub position: i32,

    pub day_of_week: DayOfWeek,

    /// HH:MM, 24h
    pub open_time: String,

    /// HH:MM, 24h
    pub close_time: String,

    pub is_closed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::poi::Entity",
        from = "Column::PoiId",
        to = "super::poi::Column::Id",
        on_delete = "Cascade"
    )]
    Poi,
}

impl Related<super::poi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Poi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
