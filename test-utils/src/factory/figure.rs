//! Figure factory for creating test figure entities.

use crate::factory::helpers::next_id;
use entity::Side;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a figure attached to the given country with default values.
pub async fn create_figure(
    db: &DatabaseConnection,
    country_id: i32,
) -> Result<entity::figure::Model, DbErr> {
    create_figure_with_side(db, country_id, Side::Allies).await
}

/// Creates a figure attached to the given country with the given side.
pub async fn create_figure_with_side(
    db: &DatabaseConnection,
    country_id: i32,
    side: Side,
) -> Result<entity::figure::Model, DbErr> {
    let id = next_id();
    entity::figure::ActiveModel {
        name: ActiveValue::Set(format!("Figure {}", id)),
        description: ActiveValue::Set(None),
        side: ActiveValue::Set(side),
        img_url: ActiveValue::Set(None),
        country_id: ActiveValue::Set(country_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
