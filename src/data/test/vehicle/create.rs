use super::*;

/// Tests creating a vehicle attached to a country.
///
/// Expected: Ok with the row persisted and the type stored
#[tokio::test]
async fn creates_vehicle_for_country() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await?;

    let repo = VehicleRepository::new(db);
    let vehicle = repo
        .create(CreateVehicleParams {
            name: "Spitfire".to_string(),
            description: Some("Supermarine fighter".to_string()),
            vehicle_type: VehicleType::Aircraft,
            img_url: None,
            country_id: country.id,
        })
        .await?;

    assert!(vehicle.id > 0);
    assert_eq!(vehicle.name, "Spitfire");
    assert_eq!(vehicle.vehicle_type, VehicleType::Aircraft);
    assert_eq!(vehicle.country_id, country.id);

    Ok(())
}
