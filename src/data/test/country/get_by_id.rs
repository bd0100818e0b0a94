use super::*;

/// Tests fetching an existing country by id.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn gets_existing_country() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country_with_side(db, Side::Axis).await?;

    let repo = CountryRepository::new(db);
    let found = repo.get_by_id(country.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, country.id);
    assert_eq!(found.side, Side::Axis);

    Ok(())
}

/// Tests fetching a nonexistent country by id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CountryRepository::new(db);
    let found = repo.get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that get_all returns every stored country ordered by name.
///
/// Expected: Ok with all rows in alphabetical order
#[tokio::test]
async fn gets_all_countries_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CountryRepository::new(db);
    repo.create(CreateCountryParams {
        name: "Poland".to_string(),
        description: None,
        side: Side::Allies,
        img_url: None,
    })
    .await?;
    repo.create(CreateCountryParams {
        name: "Italy".to_string(),
        description: None,
        side: Side::Axis,
        img_url: None,
    })
    .await?;

    let countries = repo.get_all().await?;

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name, "Italy");
    assert_eq!(countries[1].name, "Poland");

    Ok(())
}
