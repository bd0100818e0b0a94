use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};

use crate::model::battle::{CreateBattleParams, UpdateBattleParams};

pub struct BattleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BattleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new battle row. Participating countries are linked
    /// separately via `add_country`.
    pub async fn create(&self, params: &CreateBattleParams) -> Result<entity::battle::Model, DbErr> {
        entity::battle::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            location: ActiveValue::Set(params.location.clone()),
            img_url: ActiveValue::Set(params.img_url.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all battles, each paired with its participating countries.
    pub async fn get_all_with_countries(
        &self,
    ) -> Result<Vec<(entity::battle::Model, Vec<entity::country::Model>)>, DbErr> {
        entity::prelude::Battle::find()
            .find_with_related(entity::prelude::Country)
            .all(self.db)
            .await
    }

    /// Gets a battle by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::battle::Model>, DbErr> {
        entity::prelude::Battle::find_by_id(id).one(self.db).await
    }

    /// Gets a battle by id paired with its participating countries.
    pub async fn get_by_id_with_countries(
        &self,
        id: i32,
    ) -> Result<Option<(entity::battle::Model, Vec<entity::country::Model>)>, DbErr> {
        let mut battles = entity::prelude::Battle::find_by_id(id)
            .find_with_related(entity::prelude::Country)
            .all(self.db)
            .await?;

        Ok(if battles.is_empty() {
            None
        } else {
            Some(battles.remove(0))
        })
    }

    /// Gets all battles a country participates in, each paired with its
    /// full country list.
    pub async fn get_by_country_id(
        &self,
        country_id: i32,
    ) -> Result<Vec<(entity::battle::Model, Vec<entity::country::Model>)>, DbErr> {
        let battle_ids: Vec<i32> = entity::prelude::BattleCountry::find()
            .select_only()
            .column(entity::battle_country::Column::BattleId)
            .filter(entity::battle_country::Column::CountryId.eq(country_id))
            .into_tuple()
            .all(self.db)
            .await?;

        entity::prelude::Battle::find()
            .filter(entity::battle::Column::Id.is_in(battle_ids))
            .find_with_related(entity::prelude::Country)
            .all(self.db)
            .await
    }

    /// Overwrites a battle's name, location, and image. The country list is
    /// untouched.
    pub async fn update(&self, params: UpdateBattleParams) -> Result<entity::battle::Model, DbErr> {
        let battle = entity::prelude::Battle::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Battle with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::battle::ActiveModel = battle.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.location = ActiveValue::Set(params.location);
        active_model.img_url = ActiveValue::Set(params.img_url);

        active_model.update(self.db).await
    }

    /// Deletes a battle row. Call `clear_countries` first so no join rows
    /// are left behind.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Battle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Links a country to a battle. Returns false when the link already
    /// existed, leaving the row untouched.
    pub async fn add_country(&self, battle_id: i32, country_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::BattleCountry::find_by_id((battle_id, country_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::battle_country::ActiveModel {
            battle_id: ActiveValue::Set(battle_id),
            country_id: ActiveValue::Set(country_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Unlinks a country from a battle. Returns false when no link existed.
    pub async fn remove_country(&self, battle_id: i32, country_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BattleCountry::delete_by_id((battle_id, country_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes all country links for a battle.
    pub async fn clear_countries(&self, battle_id: i32) -> Result<(), DbErr> {
        entity::prelude::BattleCountry::delete_many()
            .filter(entity::battle_country::Column::BattleId.eq(battle_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes a country's links across all battles.
    pub async fn detach_country_from_all(&self, country_id: i32) -> Result<(), DbErr> {
        entity::prelude::BattleCountry::delete_many()
            .filter(entity::battle_country::Column::CountryId.eq(country_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
