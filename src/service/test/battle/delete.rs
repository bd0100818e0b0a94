use super::*;

/// Tests deleting a battle with associations.
///
/// Expected: Ok with the battle and its join rows gone while the countries
/// survive
#[tokio::test]
async fn delete_clears_associations_and_keeps_countries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await.unwrap();
    let germany = factory::country::create_country(db).await.unwrap();
    let battle = factory::battle::create_battle_with_countries(db, &[france.id, germany.id])
        .await
        .unwrap();

    let service = BattleService::new(db);
    service.delete(battle.id).await?;

    assert!(service.get_by_id(battle.id).await?.is_none());

    let join_rows = entity::prelude::BattleCountry::find()
        .filter(entity::battle_country::Column::BattleId.eq(battle.id))
        .count(db)
        .await
        .unwrap();
    assert_eq!(join_rows, 0);

    let countries = entity::prelude::Country::find().count(db).await.unwrap();
    assert_eq!(countries, 2);

    Ok(())
}

/// Tests deleting a battle that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_battle() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BattleService::new(db);
    let result = service.delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
