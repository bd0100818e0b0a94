use super::*;

/// Tests listing figures of a country through the service.
///
/// Expected: Ok with only that country's figures
#[tokio::test]
async fn lists_figures_of_country() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let france = factory::country::create_country(db).await.unwrap();
    let germany = factory::country::create_country(db).await.unwrap();
    let de_gaulle = factory::figure::create_figure(db, france.id).await.unwrap();
    factory::figure::create_figure(db, germany.id).await.unwrap();

    let service = FigureService::new(db);
    let figures = service.get_by_country(france.id).await?;

    assert_eq!(figures.len(), 1);
    assert_eq!(figures[0].id, de_gaulle.id);

    Ok(())
}

/// Tests listing figures for a country that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_country() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FigureService::new(db);
    let result = service.get_by_country(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
