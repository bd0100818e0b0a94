use super::*;

/// Tests creating a vehicle attached to an existing country.
///
/// Expected: Ok with the vehicle persisted under that country
#[tokio::test]
async fn creates_vehicle_for_existing_country() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await.unwrap();

    let service = VehicleService::new(db);
    let vehicle = service
        .create(CreateVehicleParams {
            name: "T-34".to_string(),
            description: Some("Medium tank".to_string()),
            vehicle_type: VehicleType::Tank,
            img_url: None,
            country_id: country.id,
        })
        .await?;

    assert!(vehicle.id > 0);
    assert_eq!(vehicle.vehicle_type, VehicleType::Tank);
    assert_eq!(vehicle.country_id, country.id);

    Ok(())
}

/// Tests creating a vehicle with a nonexistent country id.
///
/// Expected: Err(NotFound) and no vehicle row persisted
#[tokio::test]
async fn fails_for_unknown_country_and_persists_nothing() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = VehicleService::new(db);
    let result = service
        .create(CreateVehicleParams {
            name: "Ghost tank".to_string(),
            description: None,
            vehicle_type: VehicleType::Tank,
            img_url: None,
            country_id: 999,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let count = entity::prelude::Vehicle::find().count(db).await.unwrap();
    assert_eq!(count, 0);
}
