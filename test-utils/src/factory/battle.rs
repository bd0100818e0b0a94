//! Battle factory for creating test battle entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a battle with default values and no country associations.
pub async fn create_battle(db: &DatabaseConnection) -> Result<entity::battle::Model, DbErr> {
    let id = next_id();
    entity::battle::ActiveModel {
        name: ActiveValue::Set(format!("Battle {}", id)),
        location: ActiveValue::Set(format!("Location {}", id)),
        img_url: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a battle and join rows linking it to the given countries.
pub async fn create_battle_with_countries(
    db: &DatabaseConnection,
    country_ids: &[i32],
) -> Result<entity::battle::Model, DbErr> {
    let battle = create_battle(db).await?;

    for country_id in country_ids {
        entity::battle_country::ActiveModel {
            battle_id: ActiveValue::Set(battle.id),
            country_id: ActiveValue::Set(*country_id),
        }
        .insert(db)
        .await?;
    }

    Ok(battle)
}
