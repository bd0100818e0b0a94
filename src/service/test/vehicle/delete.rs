use super::*;

/// Tests deleting a vehicle through the service.
///
/// Expected: Ok with the vehicle gone and the owning country kept
#[tokio::test]
async fn deletes_existing_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await.unwrap();
    let vehicle = factory::vehicle::create_vehicle(db, country.id).await.unwrap();

    let service = VehicleService::new(db);
    service.delete(vehicle.id).await?;

    assert!(service.get_by_id(vehicle.id).await?.is_none());

    let db_country = entity::prelude::Country::find_by_id(country.id)
        .one(db)
        .await
        .unwrap();
    assert!(db_country.is_some());

    Ok(())
}

/// Tests deleting a vehicle that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_vehicle() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = VehicleService::new(db);
    let result = service.delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
