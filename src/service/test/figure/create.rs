use super::*;

/// Tests creating a figure attached to an existing country.
///
/// Expected: Ok with the figure persisted under that country
#[tokio::test]
async fn creates_figure_for_existing_country() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await.unwrap();

    let service = FigureService::new(db);
    let figure = service
        .create(CreateFigureParams {
            name: "Charles de Gaulle".to_string(),
            description: None,
            side: Side::Allies,
            img_url: None,
            country_id: country.id,
        })
        .await?;

    assert!(figure.id > 0);
    assert_eq!(figure.country_id, country.id);

    Ok(())
}

/// Tests creating a figure with a nonexistent country id.
///
/// Expected: Err(NotFound) and no figure row persisted
#[tokio::test]
async fn fails_for_unknown_country_and_persists_nothing() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FigureService::new(db);
    let result = service
        .create(CreateFigureParams {
            name: "Nobody".to_string(),
            description: None,
            side: Side::Neutral,
            img_url: None,
            country_id: 999,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let count = entity::prelude::Figure::find().count(db).await.unwrap();
    assert_eq!(count, 0);
}

/// Tests creating a figure with a blank name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_name() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FigureService::new(db);
    let result = service
        .create(CreateFigureParams {
            name: " ".to_string(),
            description: None,
            side: Side::Allies,
            img_url: None,
            country_id: 1,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
