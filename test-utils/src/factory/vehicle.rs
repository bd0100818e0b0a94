//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use entity::VehicleType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a vehicle attached to the given country with default values.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    country_id: i32,
) -> Result<entity::vehicle::Model, DbErr> {
    create_vehicle_with_type(db, country_id, VehicleType::Tank).await
}

/// Creates a vehicle attached to the given country with the given type.
pub async fn create_vehicle_with_type(
    db: &DatabaseConnection,
    country_id: i32,
    vehicle_type: VehicleType,
) -> Result<entity::vehicle::Model, DbErr> {
    let id = next_id();
    entity::vehicle::ActiveModel {
        name: ActiveValue::Set(format!("Vehicle {}", id)),
        description: ActiveValue::Set(None),
        vehicle_type: ActiveValue::Set(vehicle_type),
        img_url: ActiveValue::Set(None),
        country_id: ActiveValue::Set(country_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
