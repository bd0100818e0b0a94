use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::country::{CreateCountryParams, UpdateCountryParams};

pub struct CountryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CountryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new country row.
    pub async fn create(
        &self,
        params: CreateCountryParams,
    ) -> Result<entity::country::Model, DbErr> {
        entity::country::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            side: ActiveValue::Set(params.side),
            img_url: ActiveValue::Set(params.img_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all countries ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::country::Model>, DbErr> {
        entity::prelude::Country::find()
            .order_by_asc(entity::country::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets a country by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::country::Model>, DbErr> {
        entity::prelude::Country::find_by_id(id).one(self.db).await
    }

    /// Overwrites a country's name, description, side, and image.
    pub async fn update(
        &self,
        params: UpdateCountryParams,
    ) -> Result<entity::country::Model, DbErr> {
        let country = entity::prelude::Country::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Country with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::country::ActiveModel = country.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.side = ActiveValue::Set(params.side);
        active_model.img_url = ActiveValue::Set(params.img_url);

        active_model.update(self.db).await
    }

    /// Deletes a country row.
    ///
    /// Owned figures and vehicles are removed by the storage layer cascade;
    /// battle join rows are the caller's responsibility (see the country
    /// service's delete).
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Country::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a country exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Country::find()
            .filter(entity::country::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
