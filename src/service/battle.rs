use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{battle::BattleRepository, country::CountryRepository},
    error::AppError,
    model::battle::{Battle, CreateBattleParams, UpdateBattleParams},
    service::require_non_blank,
};

pub struct BattleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new battle with its initial set of participating countries
    ///
    /// The battle row and its join rows are inserted in one transaction. An
    /// unresolvable country id aborts the whole creation, so no battle row is
    /// left behind. Repeated ids in the request collapse to one association.
    pub async fn create(&self, params: CreateBattleParams) -> Result<Battle, AppError> {
        require_non_blank(&params.name, "name")?;
        require_non_blank(&params.location, "location")?;

        if params.country_ids.is_empty() {
            return Err(AppError::BadRequest(
                "countryIds must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let repo = BattleRepository::new(&txn);
        let country_repo = CountryRepository::new(&txn);

        let battle = repo.create(&params).await?;

        for country_id in &params.country_ids {
            if !country_repo.exists(*country_id).await? {
                // Dropping the uncommitted transaction rolls the battle back
                return Err(AppError::NotFound(format!(
                    "Country with id {country_id} not found"
                )));
            }

            repo.add_country(battle.id, *country_id).await?;
        }

        let full_result = repo
            .get_by_id_with_countries(battle.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Battle not found after creation".to_string()))?;

        txn.commit().await?;

        Ok(Battle::from_with_countries(full_result))
    }

    /// Gets all battles with their participating countries
    pub async fn get_all(&self) -> Result<Vec<Battle>, AppError> {
        let repo = BattleRepository::new(self.db);

        let battles = repo.get_all_with_countries().await?;

        Ok(battles
            .into_iter()
            .map(Battle::from_with_countries)
            .collect())
    }

    /// Gets a specific battle by ID with its participating countries
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Battle>, AppError> {
        let repo = BattleRepository::new(self.db);

        let battle = repo.get_by_id_with_countries(id).await?;

        Ok(battle.map(Battle::from_with_countries))
    }

    /// Gets all battles a country participates in
    pub async fn get_by_country(&self, country_id: i32) -> Result<Vec<Battle>, AppError> {
        if !CountryRepository::new(self.db).exists(country_id).await? {
            return Err(AppError::NotFound(format!(
                "Country with id {country_id} not found"
            )));
        }

        let repo = BattleRepository::new(self.db);

        let battles = repo.get_by_country_id(country_id).await?;

        Ok(battles
            .into_iter()
            .map(Battle::from_with_countries)
            .collect())
    }

    /// Updates a battle's name, location, and image, leaving the country
    /// associations untouched
    pub async fn update(&self, params: UpdateBattleParams) -> Result<Battle, AppError> {
        require_non_blank(&params.name, "name")?;
        require_non_blank(&params.location, "location")?;

        let repo = BattleRepository::new(self.db);
        let id = params.id;

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Battle with id {id} not found")));
        }

        repo.update(params).await?;

        let full_result = repo
            .get_by_id_with_countries(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Battle with id {id} not found")))?;

        Ok(Battle::from_with_countries(full_result))
    }

    /// Adds a country to a battle
    ///
    /// Re-adding a country that already participates is a no-op; the
    /// association set is unchanged either way.
    pub async fn add_country(&self, battle_id: i32, country_id: i32) -> Result<Battle, AppError> {
        let repo = BattleRepository::new(self.db);

        if repo.get_by_id(battle_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Battle with id {battle_id} not found"
            )));
        }

        if !CountryRepository::new(self.db).exists(country_id).await? {
            return Err(AppError::NotFound(format!(
                "Country with id {country_id} not found"
            )));
        }

        repo.add_country(battle_id, country_id).await?;

        let full_result = repo
            .get_by_id_with_countries(battle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Battle with id {battle_id} not found")))?;

        Ok(Battle::from_with_countries(full_result))
    }

    /// Removes a country from a battle
    ///
    /// Removing a country that does not participate logs a warning and
    /// succeeds without change.
    pub async fn remove_country(
        &self,
        battle_id: i32,
        country_id: i32,
    ) -> Result<Battle, AppError> {
        let repo = BattleRepository::new(self.db);

        if repo.get_by_id(battle_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Battle with id {battle_id} not found"
            )));
        }

        if !CountryRepository::new(self.db).exists(country_id).await? {
            return Err(AppError::NotFound(format!(
                "Country with id {country_id} not found"
            )));
        }

        let removed = repo.remove_country(battle_id, country_id).await?;

        if !removed {
            tracing::warn!(
                "Country {} is not part of battle {}, nothing to remove",
                country_id,
                battle_id
            );
        }

        let full_result = repo
            .get_by_id_with_countries(battle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Battle with id {battle_id} not found")))?;

        Ok(Battle::from_with_countries(full_result))
    }

    /// Deletes a battle, clearing its country associations in the same
    /// transaction
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BattleRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Battle with id {id} not found")));
        }

        let txn = self.db.begin().await?;

        let txn_repo = BattleRepository::new(&txn);
        txn_repo.clear_countries(id).await?;
        txn_repo.delete(id).await?;

        txn.commit().await?;

        Ok(())
    }
}
