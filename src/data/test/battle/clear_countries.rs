use super::*;

/// Tests clearing all associations of a battle.
///
/// Expected: Ok with the battle's join rows gone and other battles untouched
#[tokio::test]
async fn clears_only_battles_own_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await?;
    let germany = factory::country::create_country(db).await?;

    let cleared =
        factory::battle::create_battle_with_countries(db, &[france.id, germany.id]).await?;
    let kept = factory::battle::create_battle_with_countries(db, &[germany.id]).await?;

    let repo = BattleRepository::new(db);
    repo.clear_countries(cleared.id).await?;

    assert_eq!(association_count(db, cleared.id).await?, 0);
    assert_eq!(association_count(db, kept.id).await?, 1);

    Ok(())
}

/// Tests detaching one country from every battle it participates in.
///
/// Expected: Ok with only that country's join rows removed
#[tokio::test]
async fn detaches_country_from_all_battles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await?;
    let germany = factory::country::create_country(db).await?;

    let normandy =
        factory::battle::create_battle_with_countries(db, &[france.id, germany.id]).await?;
    let bulge =
        factory::battle::create_battle_with_countries(db, &[france.id]).await?;

    let repo = BattleRepository::new(db);
    repo.detach_country_from_all(france.id).await?;

    assert_eq!(association_count(db, normandy.id).await?, 1);
    assert_eq!(association_count(db, bulge.id).await?, 0);

    Ok(())
}
