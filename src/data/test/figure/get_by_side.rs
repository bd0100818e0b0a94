use super::*;

/// Tests filtering figures by allegiance.
///
/// Expected: Ok with only figures of the requested side
#[tokio::test]
async fn filters_by_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await?;

    let allied = factory::figure::create_figure_with_side(db, country.id, Side::Allies).await?;
    factory::figure::create_figure_with_side(db, country.id, Side::Axis).await?;

    let repo = FigureRepository::new(db);
    let figures = repo.get_by_side(Side::Allies).await?;

    assert_eq!(figures.len(), 1);
    assert_eq!(figures[0].id, allied.id);

    let axis_figures = repo.get_by_side(Side::Axis).await?;
    assert_eq!(axis_figures.len(), 1);

    let neutral_figures = repo.get_by_side(Side::Neutral).await?;
    assert!(neutral_figures.is_empty());

    Ok(())
}
