//! Battle domain models and parameters.
//!
//! A battle always carries its participating countries; the reverse
//! direction (battles of a country) is derived by query rather than kept as
//! a second synchronized list.

use crate::{
    dto::battle::{BattleDto, CreateBattleDto, UpdateBattleDto},
    model::country::Country,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Battle {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub img_url: Option<String>,
    pub countries: Vec<Country>,
}

impl Battle {
    /// Converts a battle row with its loaded countries to a domain model.
    pub fn from_with_countries(
        data: (entity::battle::Model, Vec<entity::country::Model>),
    ) -> Self {
        let (battle, countries) = data;
        Self {
            id: battle.id,
            name: battle.name,
            location: battle.location,
            img_url: battle.img_url,
            countries: countries.into_iter().map(Country::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> BattleDto {
        BattleDto {
            id: self.id,
            name: self.name,
            location: self.location,
            img_url: self.img_url,
            countries: self.countries.into_iter().map(|c| c.into_dto()).collect(),
        }
    }
}

/// Parameters for creating a battle with its initial set of countries.
#[derive(Debug, Clone)]
pub struct CreateBattleParams {
    pub name: String,
    pub location: String,
    pub img_url: Option<String>,
    pub country_ids: Vec<i32>,
}

impl CreateBattleParams {
    pub fn from_dto(dto: CreateBattleDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            img_url: dto.img_url,
            country_ids: dto.country_ids,
        }
    }
}

/// Parameters for updating a battle's scalar fields.
#[derive(Debug, Clone)]
pub struct UpdateBattleParams {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub img_url: Option<String>,
}

impl UpdateBattleParams {
    pub fn from_dto(id: i32, dto: UpdateBattleDto) -> Self {
        Self {
            id,
            name: dto.name,
            location: dto.location,
            img_url: dto.img_url,
        }
    }
}
