use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A bakery. Rows are created out of band (see the `seeder` binary); the API
/// only reads them and renames them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "bakeries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::baked_good::Entity")]
    BakedGood,
}

impl Related<super::baked_good::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BakedGood.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
