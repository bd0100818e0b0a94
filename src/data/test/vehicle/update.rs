use super::*;

/// Tests updating a vehicle's mutable fields.
///
/// Expected: Ok with name, description, and type replaced while the owning
/// country is untouched
#[tokio::test]
async fn updates_mutable_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::country::create_country(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db, country.id).await?;

    let repo = VehicleRepository::new(db);
    let updated = repo
        .update(UpdateVehicleParams {
            id: vehicle.id,
            name: "U-47".to_string(),
            description: Some("Type VIIB U-boat".to_string()),
            vehicle_type: VehicleType::Submarine,
        })
        .await?;

    assert_eq!(updated.name, "U-47");
    assert_eq!(updated.vehicle_type, VehicleType::Submarine);
    assert_eq!(updated.country_id, country.id);

    Ok(())
}

/// Tests updating a vehicle that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_id() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let result = repo
        .update(UpdateVehicleParams {
            id: 999,
            name: "Ghost".to_string(),
            description: None,
            vehicle_type: VehicleType::Ship,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
