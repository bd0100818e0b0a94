//! Country domain models and parameters.

use entity::Side;

use crate::dto::country::{CountryDto, CreateCountryDto, UpdateCountryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub side: Side,
    pub img_url: Option<String>,
}

impl Country {
    /// Converts an entity row to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::country::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            side: entity.side,
            img_url: entity.img_url,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> CountryDto {
        CountryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            side: self.side,
            img_url: self.img_url,
        }
    }
}

/// Parameters for creating a new country.
#[derive(Debug, Clone)]
pub struct CreateCountryParams {
    pub name: String,
    pub description: Option<String>,
    pub side: Side,
    pub img_url: Option<String>,
}

impl CreateCountryParams {
    pub fn from_dto(dto: CreateCountryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            side: dto.side,
            img_url: dto.img_url,
        }
    }
}

/// Parameters for updating an existing country in place.
#[derive(Debug, Clone)]
pub struct UpdateCountryParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub side: Side,
    pub img_url: Option<String>,
}

impl UpdateCountryParams {
    pub fn from_dto(id: i32, dto: UpdateCountryDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            side: dto.side,
            img_url: dto.img_url,
        }
    }
}
