use super::*;

/// Tests deleting a figure row.
///
/// Expected: Ok with the row gone and the owning country untouched
#[tokio::test]
async fn deletes_figure_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await?;
    let figure = factory::figure::create_figure(db, country.id).await?;

    let repo = FigureRepository::new(db);
    repo.delete(figure.id).await?;

    assert!(repo.get_by_id(figure.id).await?.is_none());

    let db_country = entity::prelude::Country::find_by_id(country.id)
        .one(db)
        .await?;
    assert!(db_country.is_some());

    Ok(())
}
