use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::figure::{CreateFigureParams, UpdateFigureParams};

pub struct FigureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FigureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new figure row attached to a country.
    pub async fn create(&self, params: CreateFigureParams) -> Result<entity::figure::Model, DbErr> {
        entity::figure::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            side: ActiveValue::Set(params.side),
            img_url: ActiveValue::Set(params.img_url),
            country_id: ActiveValue::Set(params.country_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all figures ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::figure::Model>, DbErr> {
        entity::prelude::Figure::find()
            .order_by_asc(entity::figure::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets a figure by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::figure::Model>, DbErr> {
        entity::prelude::Figure::find_by_id(id).one(self.db).await
    }

    /// Gets all figures belonging to a country.
    pub async fn get_by_country_id(
        &self,
        country_id: i32,
    ) -> Result<Vec<entity::figure::Model>, DbErr> {
        entity::prelude::Figure::find()
            .filter(entity::figure::Column::CountryId.eq(country_id))
            .order_by_asc(entity::figure::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets all figures with the given allegiance.
    pub async fn get_by_side(&self, side: entity::Side) -> Result<Vec<entity::figure::Model>, DbErr> {
        entity::prelude::Figure::find()
            .filter(entity::figure::Column::Side.eq(side))
            .order_by_asc(entity::figure::Column::Name)
            .all(self.db)
            .await
    }

    /// Overwrites a figure's name, description, and side.
    pub async fn update(&self, params: UpdateFigureParams) -> Result<entity::figure::Model, DbErr> {
        let figure = entity::prelude::Figure::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Figure with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::figure::ActiveModel = figure.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.side = ActiveValue::Set(params.side);

        active_model.update(self.db).await
    }

    /// Deletes a figure row.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Figure::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a figure exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Figure::find()
            .filter(entity::figure::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
