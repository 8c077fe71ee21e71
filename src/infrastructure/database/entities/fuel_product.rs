//! FuelProduct entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fuel_products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub pump_id: String,

    /// Product name (e.g., "Diesel", "Super E10")
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pump::Entity",
        from = "Column::PumpId",
        to = "super::pump::Column::Id",
        on_delete = "Cascade"
    )]
    Pump,
    #[sea_orm(has_many = "super::price::Entity")]
    Prices,
}

impl Related<super::pump::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pump.def()
    }
}

impl Related<super::price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
