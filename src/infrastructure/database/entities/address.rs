//! Address entity, unique per POI

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub poi_id: String,

    pub country: String,
    pub zip_code: String,
    pub city: String,
    pub street: String,
    pub house_number: String,
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
