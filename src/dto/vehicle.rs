use entity::VehicleType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "TANK")]
    pub vehicle_type: VehicleType,
    pub img_url: Option<String>,
    pub country_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateVehicleDto {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "TANK")]
    pub vehicle_type: VehicleType,
    pub img_url: Option<String>,
    pub country_id: i32,
}

/// Update replaces name, description, and vehicle type; the owning country
/// and image are left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateVehicleDto {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "TANK")]
    pub vehicle_type: VehicleType,
}
