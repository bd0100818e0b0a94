use sea_orm::DatabaseConnection;

use crate::{
    data::{country::CountryRepository, figure::FigureRepository},
    error::AppError,
    model::figure::{CreateFigureParams, Figure, UpdateFigureParams},
    service::require_non_blank,
};

pub struct FigureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FigureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new figure attached to an existing country
    pub async fn create(&self, params: CreateFigureParams) -> Result<Figure, AppError> {
        require_non_blank(&params.name, "name")?;

        if !CountryRepository::new(self.db).exists(params.country_id).await? {
            return Err(AppError::NotFound(format!(
                "Country with id {} not found",
                params.country_id
            )));
        }

        let repo = FigureRepository::new(self.db);

        let figure = repo.create(params).await?;

        Ok(Figure::from_entity(figure))
    }

    /// Gets all figures
    pub async fn get_all(&self) -> Result<Vec<Figure>, AppError> {
        let repo = FigureRepository::new(self.db);

        let figures = repo.get_all().await?;

        Ok(figures.into_iter().map(Figure::from_entity).collect())
    }

    /// Gets a specific figure by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Figure>, AppError> {
        let repo = FigureRepository::new(self.db);

        let figure = repo.get_by_id(id).await?;

        Ok(figure.map(Figure::from_entity))
    }

    /// Gets all figures belonging to a country
    pub async fn get_by_country(&self, country_id: i32) -> Result<Vec<Figure>, AppError> {
        if !CountryRepository::new(self.db).exists(country_id).await? {
            return Err(AppError::NotFound(format!(
                "Country with id {country_id} not found"
            )));
        }

        let repo = FigureRepository::new(self.db);

        let figures = repo.get_by_country_id(country_id).await?;

        Ok(figures.into_iter().map(Figure::from_entity).collect())
    }

    /// Gets all figures with the given allegiance
    pub async fn get_by_side(&self, side: entity::Side) -> Result<Vec<Figure>, AppError> {
        let repo = FigureRepository::new(self.db);

        let figures = repo.get_by_side(side).await?;

        Ok(figures.into_iter().map(Figure::from_entity).collect())
    }

    /// Updates a figure's name, description, and side
    pub async fn update(&self, params: UpdateFigureParams) -> Result<Figure, AppError> {
        require_non_blank(&params.name, "name")?;

        let repo = FigureRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Err(AppError::NotFound(format!(
                "Figure with id {} not found",
                params.id
            )));
        }

        let figure = repo.update(params).await?;

        Ok(Figure::from_entity(figure))
    }

    /// Deletes a figure
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = FigureRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(format!("Figure with id {id} not found")));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
