use super::*;

/// Tests creating a country with all fields set.
///
/// Expected: Ok with the row persisted and an assigned id
#[tokio::test]
async fn creates_country_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CountryRepository::new(db);
    let country = repo
        .create(CreateCountryParams {
            name: "France".to_string(),
            description: Some("Republic, occupied 1940".to_string()),
            side: Side::Allies,
            img_url: Some("https://example.com/fr.png".to_string()),
        })
        .await?;

    assert!(country.id > 0);
    assert_eq!(country.name, "France");
    assert_eq!(country.side, Side::Allies);

    let db_country = entity::prelude::Country::find_by_id(country.id)
        .one(db)
        .await?;
    assert!(db_country.is_some());
    assert_eq!(db_country.unwrap().name, "France");

    Ok(())
}

/// Tests creating a country with optional fields omitted.
///
/// Expected: Ok with None description and img_url
#[tokio::test]
async fn creates_country_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CountryRepository::new(db);
    let country = repo
        .create(CreateCountryParams {
            name: "Switzerland".to_string(),
            description: None,
            side: Side::Neutral,
            img_url: None,
        })
        .await?;

    assert!(country.description.is_none());
    assert!(country.img_url.is_none());
    assert_eq!(country.side, Side::Neutral);

    Ok(())
}
