use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::Side;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub side: Side,
    pub img_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::figure::Entity")]
    Figure,
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicle,
}

impl Related<super::figure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Figure.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::battle::Entity> for Entity {
    fn to() -> RelationDef {
        super::battle_country::Relation::Battle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::battle_country::Relation::Country.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
