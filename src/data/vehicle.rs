use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::vehicle::{CreateVehicleParams, UpdateVehicleParams};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new vehicle row attached to a country.
    pub async fn create(
        &self,
        params: CreateVehicleParams,
    ) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            vehicle_type: ActiveValue::Set(params.vehicle_type),
            img_url: ActiveValue::Set(params.img_url),
            country_id: ActiveValue::Set(params.country_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all vehicles ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets a vehicle by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    /// Gets all vehicles belonging to a country.
    pub async fn get_by_country_id(
        &self,
        country_id: i32,
    ) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::CountryId.eq(country_id))
            .order_by_asc(entity::vehicle::Column::Name)
            .all(self.db)
            .await
    }

    /// Overwrites a vehicle's name, description, and type.
    pub async fn update(
        &self,
        params: UpdateVehicleParams,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::prelude::Vehicle::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Vehicle with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.vehicle_type = ActiveValue::Set(params.vehicle_type);

        active_model.update(self.db).await
    }

    /// Deletes a vehicle row.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a vehicle exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
