use super::*;

/// Tests fetching battles by participating country.
///
/// Expected: Ok with only the battles the country fought in, each carrying
/// its full country list
#[tokio::test]
async fn gets_battles_of_country() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await?;
    let germany = factory::country::create_country(db).await?;

    let normandy =
        factory::battle::create_battle_with_countries(db, &[france.id, germany.id]).await?;
    factory::battle::create_battle_with_countries(db, &[germany.id]).await?;

    let repo = BattleRepository::new(db);
    let battles = repo.get_by_country_id(france.id).await?;

    assert_eq!(battles.len(), 1);
    let (battle, countries) = &battles[0];
    assert_eq!(battle.id, normandy.id);
    assert_eq!(countries.len(), 2);

    let german_battles = repo.get_by_country_id(germany.id).await?;
    assert_eq!(german_battles.len(), 2);

    Ok(())
}

/// Tests fetching battles for a country that fought in none.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_uninvolved_country() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await?;
    factory::battle::create_battle(db).await?;

    let repo = BattleRepository::new(db);
    let battles = repo.get_by_country_id(country.id).await?;

    assert!(battles.is_empty());

    Ok(())
}
