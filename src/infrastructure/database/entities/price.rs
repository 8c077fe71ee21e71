//! Price entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub fuel_product_id: String,

    /// Non-negative amount in `currency` units
    pub amount: f64,

    /// ISO-4217 style code, e.g. "EUR"
    pub currency: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fuel_product::Entity",
        from = "Column::FuelProductId",
        to = "super::fuel_product::Column::Id",
        on_delete = "Cascade"
    )]
    FuelProduct,
}

impl Related<super::fuel_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
