use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{battle::BattleRepository, country::CountryRepository},
    error::AppError,
    model::country::{Country, CreateCountryParams, UpdateCountryParams},
    service::require_non_blank,
};

pub struct CountryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new country
    pub async fn create(&self, params: CreateCountryParams) -> Result<Country, AppError> {
        require_non_blank(&params.name, "name")?;

        let repo = CountryRepository::new(self.db);

        let country = repo.create(params).await?;

        Ok(Country::from_entity(country))
    }

    /// Gets all countries
    pub async fn get_all(&self) -> Result<Vec<Country>, AppError> {
        let repo = CountryRepository::new(self.db);

        let countries = repo.get_all().await?;

        Ok(countries.into_iter().map(Country::from_entity).collect())
    }

    /// Gets a specific country by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Country>, AppError> {
        let repo = CountryRepository::new(self.db);

        let country = repo.get_by_id(id).await?;

        Ok(country.map(Country::from_entity))
    }

    /// Updates a country's name, description, side, and image
    pub async fn update(&self, params: UpdateCountryParams) -> Result<Country, AppError> {
        require_non_blank(&params.name, "name")?;

        let repo = CountryRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Err(AppError::NotFound(format!(
                "Country with id {} not found",
                params.id
            )));
        }

        let country = repo.update(params).await?;

        Ok(Country::from_entity(country))
    }

    /// Deletes a country
    ///
    /// Battle associations are detached in the same transaction as the row
    /// delete; figures and vehicles cascade in the storage layer.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CountryRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(format!(
                "Country with id {id} not found"
            )));
        }

        let txn = self.db.begin().await?;

        BattleRepository::new(&txn).detach_country_from_all(id).await?;
        CountryRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(())
    }
}
