use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "battles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub img_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        super::battle_country::Relation::Country.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::battle_country::Relation::Battle.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
