//! Pump entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pumps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub poi_id: String,

    pub name: String,
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
    #[sea_orm(has_many = "super::fuel_product::Entity")]
    FuelProducts,
}

impl Related<super::poi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Poi.def()
    }
}

impl Related<super::fuel_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelProducts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
