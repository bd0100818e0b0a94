//! Vehicle domain models and parameters.

use entity::VehicleType;

use crate::dto::vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub vehicle_type: VehicleType,
    pub img_url: Option<String>,
    pub country_id: i32,
}

impl Vehicle {
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            vehicle_type: entity.vehicle_type,
            img_url: entity.img_url,
            country_id: entity.country_id,
        }
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            description: self.description,
            vehicle_type: self.vehicle_type,
            img_url: self.img_url,
            country_id: self.country_id,
        }
    }
}

/// Parameters for creating a new vehicle attached to a country.
#[derive(Debug, Clone)]
pub struct CreateVehicleParams {
    pub name: String,
    pub description: Option<String>,
    pub vehicle_type: VehicleType,
    pub img_url: Option<String>,
    pub country_id: i32,
}

impl CreateVehicleParams {
    pub fn from_dto(dto: CreateVehicleDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            vehicle_type: dto.vehicle_type,
            img_url: dto.img_url,
            country_id: dto.country_id,
        }
    }
}

/// Parameters for updating a vehicle's name, description, and type.
#[derive(Debug, Clone)]
pub struct UpdateVehicleParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub vehicle_type: VehicleType,
}

impl UpdateVehicleParams {
    pub fn from_dto(id: i32, dto: UpdateVehicleDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            vehicle_type: dto.vehicle_type,
        }
    }
}
