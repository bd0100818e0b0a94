//! Figure domain models and parameters.

use entity::Side;

use crate::dto::figure::{CreateFigureDto, FigureDto, UpdateFigureDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub side: Side,
    pub img_url: Option<String>,
    pub country_id: i32,
}

impl Figure {
    pub fn from_entity(entity: entity::figure::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            side: entity.side,
            img_url: entity.img_url,
            country_id: entity.country_id,
        }
    }

    pub fn into_dto(self) -> FigureDto {
        FigureDto {
            id: self.id,
            name: self.name,
            description: self.description,
            side: self.side,
            img_url: self.img_url,
            country_id: self.country_id,
        }
    }
}

/// Parameters for creating a new figure attached to a country.
#[derive(Debug, Clone)]
pub struct CreateFigureParams {
    pub name: String,
    pub description: Option<String>,
    pub side: Side,
    pub img_url: Option<String>,
    pub country_id: i32,
}

impl CreateFigureParams {
    pub fn from_dto(dto: CreateFigureDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            side: dto.side,
            img_url: dto.img_url,
            country_id: dto.country_id,
        }
    }
}

/// Parameters for updating a figure's name, description, and side.
#[derive(Debug, Clone)]
pub struct UpdateFigureParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub side: Side,
}

impl UpdateFigureParams {
    pub fn from_dto(id: i32, dto: UpdateFigureDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            side: dto.side,
        }
    }
}
