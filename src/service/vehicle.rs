use sea_orm::DatabaseConnection;

use crate::{
    data::{country::CountryRepository, vehicle::VehicleRepository},
    error::AppError,
    model::vehicle::{CreateVehicleParams, UpdateVehicleParams, Vehicle},
    service::require_non_blank,
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new vehicle attached to an existing country
    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, AppError> {
        require_non_blank(&params.name, "name")?;

        if !CountryRepository::new(self.db).exists(params.country_id).await? {
            return Err(AppError::NotFound(format!(
                "Country with id {} not found",
                params.country_id
            )));
        }

        let repo = VehicleRepository::new(self.db);

        let vehicle = repo.create(params).await?;

        Ok(Vehicle::from_entity(vehicle))
    }

    /// Gets all vehicles
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let repo = VehicleRepository::new(self.db);

        let vehicles = repo.get_all().await?;

        Ok(vehicles.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Gets a specific vehicle by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let repo = VehicleRepository::new(self.db);

        let vehicle = repo.get_by_id(id).await?;

        Ok(vehicle.map(Vehicle::from_entity))
    }

    /// Gets all vehicles belonging to a country
    pub async fn get_by_country(&self, country_id: i32) -> Result<Vec<Vehicle>, AppError> {
        if !CountryRepository::new(self.db).exists(country_id).await? {
            return Err(AppError::NotFound(format!(
                "Country with id {country_id} not found"
            )));
        }

        let repo = VehicleRepository::new(self.db);

        let vehicles = repo.get_by_country_id(country_id).await?;

        Ok(vehicles.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Updates a vehicle's name, description, and type
    pub async fn update(&self, params: UpdateVehicleParams) -> Result<Vehicle, AppError> {
        require_non_blank(&params.name, "name")?;

        let repo = VehicleRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Err(AppError::NotFound(format!(
                "Vehicle with id {} not found",
                params.id
            )));
        }

        let vehicle = repo.update(params).await?;

        Ok(Vehicle::from_entity(vehicle))
    }

    /// Deletes a vehicle
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = VehicleRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(format!(
                "Vehicle with id {id} not found"
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
