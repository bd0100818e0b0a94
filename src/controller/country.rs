use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        country::{CountryDto, CreateCountryDto, UpdateCountryDto},
    },
    error::AppError,
    model::country::{CreateCountryParams, UpdateCountryParams},
    service::country::CountryService,
    state::AppState,
};

/// Tag for grouping country endpoints in OpenAPI documentation
pub static COUNTRY_TAG: &str = "country";

/// Get all countries.
///
/// # Returns
/// - `200 OK` - List of all countries ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = COUNTRY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved countries", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let countries = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            countries
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific country by ID.
///
/// # Returns
/// - `200 OK` - Country details
/// - `404 Not Found` - No country with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/countries/{id}",
    tag = COUNTRY_TAG,
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved country", body = CountryDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let country = service.get_by_id(id).await?;

    match country {
        Some(country) => Ok((StatusCode::OK, Json(country.into_dto()))),
        None => Err(AppError::NotFound(format!(
            "Country with id {id} not found"
        ))),
    }
}

/// Create a new country.
///
/// The side is one of ALLIES, AXIS, or NEUTRAL; the name must not be blank.
///
/// # Returns
/// - `201 Created` - Successfully created country
/// - `400 Bad Request` - Blank name or unknown side value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/countries",
    tag = COUNTRY_TAG,
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Successfully created country", body = CountryDto),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    Json(payload): Json<CreateCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let params = CreateCountryParams::from_dto(payload);

    let country = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(country.into_dto())))
}

/// Update a country.
///
/// Replaces the country's name, description, side, and image URL.
///
/// # Returns
/// - `200 OK` - Successfully updated country
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - No country with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/countries/{id}",
    tag = COUNTRY_TAG,
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    request_body = UpdateCountryDto,
    responses(
        (status = 200, description = "Successfully updated country", body = CountryDto),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let params = UpdateCountryParams::from_dto(id, payload);

    let country = service.update(params).await?;

    Ok((StatusCode::OK, Json(country.into_dto())))
}

/// Delete a country.
///
/// Detaches the country from all battles; its figures and vehicles are
/// removed by the storage-level cascade.
///
/// # Returns
/// - `204 No Content` - Successfully deleted country
/// - `404 Not Found` - No country with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/countries/{id}",
    tag = COUNTRY_TAG,
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted country"),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
