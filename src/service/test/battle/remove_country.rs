use super::*;

/// Tests detaching a participating country from a battle.
///
/// Expected: Ok with the country gone from the battle but both rows kept
#[tokio::test]
async fn detaches_country() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await.unwrap();
    let germany = factory::country::create_country(db).await.unwrap();
    let battle = factory::battle::create_battle_with_countries(db, &[france.id, germany.id])
        .await
        .unwrap();

    let service = BattleService::new(db);
    let result = service.remove_country(battle.id, france.id).await?;

    assert_eq!(result.countries.len(), 1);
    assert_eq!(result.countries[0].id, germany.id);

    let db_country = entity::prelude::Country::find_by_id(france.id)
        .one(db)
        .await
        .unwrap();
    assert!(db_country.is_some());

    Ok(())
}

/// Tests detaching a country that is not part of the battle.
///
/// Expected: Ok with the battle unchanged, no error
#[tokio::test]
async fn remove_of_non_member_succeeds_without_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::country::create_country(db).await.unwrap();
    let outsider = factory::country::create_country(db).await.unwrap();
    let battle = factory::battle::create_battle_with_countries(db, &[member.id])
        .await
        .unwrap();

    let service = BattleService::new(db);
    let result = service.remove_country(battle.id, outsider.id).await?;

    assert_eq!(result.countries.len(), 1);
    assert_eq!(result.countries[0].id, member.id);

    Ok(())
}

/// Tests detaching with an unresolvable battle or country id.
///
/// Expected: Err(NotFound) in both directions
#[tokio::test]
async fn fails_for_unknown_ids() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await.unwrap();
    let battle = factory::battle::create_battle(db).await.unwrap();

    let service = BattleService::new(db);

    let unknown_battle = service.remove_country(999, france.id).await;
    assert!(matches!(unknown_battle, Err(AppError::NotFound(_))));

    let unknown_country = service.remove_country(battle.id, 999).await;
    assert!(matches!(unknown_country, Err(AppError::NotFound(_))));
}
