use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    },
    error::AppError,
    model::vehicle::{CreateVehicleParams, UpdateVehicleParams},
    service::vehicle::VehicleService,
    state::AppState,
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// Get all vehicles.
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = VehicleService::new(&state.db);

    let vehicles = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            vehicles
                .into_iter()
                .map(|v| v.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific vehicle by ID.
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = VehicleService::new(&state.db);

    let vehicle = service.get_by_id(id).await?;

    match vehicle {
        Some(vehicle) => Ok((StatusCode::OK, Json(vehicle.into_dto()))),
        None => Err(AppError::NotFound(format!(
            "Vehicle with id {id} not found"
        ))),
    }
}

/// Get all vehicles belonging to a country.
///
/// # Returns
/// - `200 OK` - Vehicles of the country, possibly empty
/// - `404 Not Found` - No country with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/vehicles/country/{country_id}",
    tag = VEHICLE_TAG,
    params(
        ("country_id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicles", body = Vec<VehicleDto>),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles_by_country(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = VehicleService::new(&state.db);

    let vehicles = service.get_by_country(country_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            vehicles
                .into_iter()
                .map(|v| v.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new vehicle.
///
/// The vehicle is attached to an existing country via `country_id`. The type
/// is one of TANK, AIRCRAFT, SHIP, SUBMARINE, ARTILLERY, or TRANSPORT.
///
/// # Returns
/// - `201 Created` - Successfully created vehicle
/// - `400 Bad Request` - Blank name or unknown vehicle type
/// - `404 Not Found` - Referenced country does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Successfully created vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = VehicleService::new(&state.db);

    let params = CreateVehicleParams::from_dto(payload);

    let vehicle = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

/// Update a vehicle.
///
/// Replaces the vehicle's name, description, and type; the owning country
/// and image are left untouched.
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Successfully updated vehicle", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = VehicleService::new(&state.db);

    let params = UpdateVehicleParams::from_dto(id, payload);

    let vehicle = service.update(params).await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Delete a vehicle.
#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted vehicle"),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = VehicleService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
