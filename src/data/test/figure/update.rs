use super::*;

/// Tests updating a figure's mutable fields.
///
/// Expected: Ok with name, description, and side replaced while the owning
/// country is untouched
#[tokio::test]
async fn updates_mutable_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await?;
    let figure = factory::figure::create_figure(db, country.id).await?;

    let repo = FigureRepository::new(db);
    let updated = repo
        .update(UpdateFigureParams {
            id: figure.id,
            name: "Erwin Rommel".to_string(),
            description: Some("Afrika Korps commander".to_string()),
            side: Side::Axis,
        })
        .await?;

    assert_eq!(updated.name, "Erwin Rommel");
    assert_eq!(updated.side, Side::Axis);
    assert_eq!(updated.country_id, country.id);

    Ok(())
}

/// Tests updating a figure that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_id() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FigureRepository::new(db);
    let result = repo
        .update(UpdateFigureParams {
            id: 999,
            name: "Nobody".to_string(),
            description: None,
            side: Side::Neutral,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
