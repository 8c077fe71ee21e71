//! POI entity (aggregate root table)

use sea_orm::entity::prelude::*;

/// Stored POI status
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PoiStatus {
    #[sea_orm(string_value = "ONLINE")]
    Online,
    #[sea_orm(string_value = "OFFLINE")]
    Offline,
    #[sea_orm(string_value = "MAINTENANCE")]
    Maintenance,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pois")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    pub status: PoiStatus,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::address::Entity")]
    Address,
    #[sea_orm(has_many = "super::opening_hours::Entity")]
    OpeningHours,
    #[sea_orm(has_many = "super::pump::Entity")]
    Pumps,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::opening_hours::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OpeningHours.def()
    }
}

impl Related<super::pump::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pumps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
