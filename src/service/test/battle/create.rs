use super::*;

/// Tests creating a battle with two participating countries.
///
/// Expected: Ok with both countries loaded on the returned battle
#[tokio::test]
async fn creates_battle_with_countries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await.unwrap();
    let germany = factory::country::create_country(db).await.unwrap();

    let service = BattleService::new(db);
    let battle = service
        .create(CreateBattleParams {
            name: "Battle of Normandy".to_string(),
            location: "Normandy, France".to_string(),
            img_url: None,
            country_ids: vec![france.id, germany.id],
        })
        .await?;

    assert!(battle.id > 0);
    assert_eq!(battle.countries.len(), 2);

    let country_ids: Vec<i32> = battle.countries.iter().map(|c| c.id).collect();
    assert!(country_ids.contains(&france.id));
    assert!(country_ids.contains(&germany.id));

    Ok(())
}

/// Tests that repeated country ids in the request collapse to one
/// association.
///
/// Expected: Ok with a single country on the battle
#[tokio::test]
async fn collapses_duplicate_country_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await.unwrap();

    let service = BattleService::new(db);
    let battle = service
        .create(CreateBattleParams {
            name: "Battle of Normandy".to_string(),
            location: "Normandy, France".to_string(),
            img_url: None,
            country_ids: vec![france.id, france.id, france.id],
        })
        .await?;

    assert_eq!(battle.countries.len(), 1);

    Ok(())
}

/// Tests that an unresolvable country id rolls the whole creation back.
///
/// Expected: Err(NotFound) with no battle row and no join rows persisted
#[tokio::test]
async fn unknown_country_rolls_back_battle_row() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BattleService::new(db);
    let result = service
        .create(CreateBattleParams {
            name: "Phantom battle".to_string(),
            location: "Nowhere".to_string(),
            img_url: None,
            country_ids: vec![999],
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let battles = entity::prelude::Battle::find().count(db).await.unwrap();
    assert_eq!(battles, 0);

    let join_rows = entity::prelude::BattleCountry::find().count(db).await.unwrap();
    assert_eq!(join_rows, 0);
}

/// Tests that a valid country before the unknown one does not leak a
/// partial association set.
///
/// Expected: Err(NotFound) with nothing persisted
#[tokio::test]
async fn partial_resolution_persists_nothing() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await.unwrap();

    let service = BattleService::new(db);
    let result = service
        .create(CreateBattleParams {
            name: "Half resolved".to_string(),
            location: "Somewhere".to_string(),
            img_url: None,
            country_ids: vec![france.id, 999],
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let battles = entity::prelude::Battle::find().count(db).await.unwrap();
    assert_eq!(battles, 0);

    let join_rows = entity::prelude::BattleCountry::find().count(db).await.unwrap();
    assert_eq!(join_rows, 0);
}

/// Tests validation of the creation parameters.
///
/// Expected: Err(BadRequest) for blank name, blank location, and an empty
/// country id list
#[tokio::test]
async fn rejects_invalid_params() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BattleService::new(db);

    let blank_name = service
        .create(CreateBattleParams {
            name: " ".to_string(),
            location: "Normandy".to_string(),
            img_url: None,
            country_ids: vec![1],
        })
        .await;
    assert!(matches!(blank_name, Err(AppError::BadRequest(_))));

    let blank_location = service
        .create(CreateBattleParams {
            name: "Battle".to_string(),
            location: String::new(),
            img_url: None,
            country_ids: vec![1],
        })
        .await;
    assert!(matches!(blank_location, Err(AppError::BadRequest(_))));

    let no_countries = service
        .create(CreateBattleParams {
            name: "Battle".to_string(),
            location: "Normandy".to_string(),
            img_url: None,
            country_ids: vec![],
        })
        .await;
    assert!(matches!(no_countries, Err(AppError::BadRequest(_))));
}
