use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::Side;

use crate::{
    dto::{
        api::ErrorDto,
        figure::{CreateFigureDto, FigureDto, UpdateFigureDto},
    },
    error::AppError,
    model::figure::{CreateFigureParams, UpdateFigureParams},
    service::figure::FigureService,
    state::AppState,
};

/// Tag for grouping figure endpoints in OpenAPI documentation
pub static FIGURE_TAG: &str = "figure";

/// Get all figures.
#[utoipa::path(
    get,
    path = "/api/figures",
    tag = FIGURE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved figures", body = Vec<FigureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_figures(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = FigureService::new(&state.db);

    let figures = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            figures
                .into_iter()
                .map(|f| f.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific figure by ID.
#[utoipa::path(
    get,
    path = "/api/figures/{id}",
    tag = FIGURE_TAG,
    params(
        ("id" = i32, Path, description = "Figure ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved figure", body = FigureDto),
        (status = 404, description = "Figure not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_figure_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FigureService::new(&state.db);

    let figure = service.get_by_id(id).await?;

    match figure {
        Some(figure) => Ok((StatusCode::OK, Json(figure.into_dto()))),
        None => Err(AppError::NotFound(format!("Figure with id {id} not found"))),
    }
}

/// Get all figures belonging to a country.
///
/// # Returns
/// - `200 OK` - Figures of the country, possibly empty
/// - `404 Not Found` - No country with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/figures/country/{country_id}",
    tag = FIGURE_TAG,
    params(
        ("country_id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved figures", body = Vec<FigureDto>),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_figures_by_country(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FigureService::new(&state.db);

    let figures = service.get_by_country(country_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            figures
                .into_iter()
                .map(|f| f.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get all figures with the given allegiance.
///
/// The side path segment is one of ALLIES, AXIS, or NEUTRAL. The segment is
/// parsed here rather than by the path extractor so an unknown value gets
/// the standard `{"error": <message>}` body.
#[utoipa::path(
    get,
    path = "/api/figures/side/{side}",
    tag = FIGURE_TAG,
    params(
        ("side" = String, Path, description = "Allegiance (ALLIES, AXIS, or NEUTRAL)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved figures", body = Vec<FigureDto>),
        (status = 400, description = "Unknown side value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_figures_by_side(
    State(state): State<AppState>,
    Path(side): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let side: Side = side.parse().map_err(AppError::BadRequest)?;

    let service = FigureService::new(&state.db);

    let figures = service.get_by_side(side).await?;

    Ok((
        StatusCode::OK,
        Json(
            figures
                .into_iter()
                .map(|f| f.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new figure.
///
/// The figure is attached to an existing country via `country_id`.
///
/// # Returns
/// - `201 Created` - Successfully created figure
/// - `400 Bad Request` - Blank name or unknown side value
/// - `404 Not Found` - Referenced country does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/figures",
    tag = FIGURE_TAG,
    request_body = CreateFigureDto,
    responses(
        (status = 201, description = "Successfully created figure", body = FigureDto),
        (status = 400, description = "Invalid figure data", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_figure(
    State(state): State<AppState>,
    Json(payload): Json<CreateFigureDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FigureService::new(&state.db);

    let params = CreateFigureParams::from_dto(payload);

    let figure = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(figure.into_dto())))
}

/// Update a figure.
///
/// Replaces the figure's name, description, and side; the owning country
/// and image are left untouched.
#[utoipa::path(
    put,
    path = "/api/figures/{id}",
    tag = FIGURE_TAG,
    params(
        ("id" = i32, Path, description = "Figure ID")
    ),
    request_body = UpdateFigureDto,
    responses(
        (status = 200, description = "Successfully updated figure", body = FigureDto),
        (status = 400, description = "Invalid figure data", body = ErrorDto),
        (status = 404, description = "Figure not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_figure(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFigureDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FigureService::new(&state.db);

    let params = UpdateFigureParams::from_dto(id, payload);

    let figure = service.update(params).await?;

    Ok((StatusCode::OK, Json(figure.into_dto())))
}

/// Delete a figure.
#[utoipa::path(
    delete,
    path = "/api/figures/{id}",
    tag = FIGURE_TAG,
    params(
        ("id" = i32, Path, description = "Figure ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted figure"),
        (status = 404, description = "Figure not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_figure(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FigureService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
