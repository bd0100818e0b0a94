use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        battle::{BattleDto, CreateBattleDto, UpdateBattleDto},
    },
    error::AppError,
    model::battle::{CreateBattleParams, UpdateBattleParams},
    service::battle::BattleService,
    state::AppState,
};

/// Tag for grouping battle endpoints in OpenAPI documentation
pub static BATTLE_TAG: &str = "battle";

/// Get all battles with their participating countries.
#[utoipa::path(
    get,
    path = "/api/battles",
    tag = BATTLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved battles", body = Vec<BattleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battles = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            battles
                .into_iter()
                .map(|b| b.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific battle by ID with its participating countries.
#[utoipa::path(
    get,
    path = "/api/battles/{id}",
    tag = BATTLE_TAG,
    params(
        ("id" = i32, Path, description = "Battle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved battle", body = BattleDto),
        (status = 404, description = "Battle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battle_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battle = service.get_by_id(id).await?;

    match battle {
        Some(battle) => Ok((StatusCode::OK, Json(battle.into_dto()))),
        None => Err(AppError::NotFound(format!("Battle with id {id} not found"))),
    }
}

/// Get all battles a country participates in.
///
/// # Returns
/// - `200 OK` - Battles of the country, possibly empty
/// - `404 Not Found` - No country with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/battles/country/{country_id}",
    tag = BATTLE_TAG,
    params(
        ("country_id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved battles", body = Vec<BattleDto>),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battles_by_country(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battles = service.get_by_country(country_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            battles
                .into_iter()
                .map(|b| b.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new battle.
///
/// The battle is created together with its initial set of participating
/// countries. An unresolvable country id aborts the whole creation and no
/// battle row is persisted.
///
/// # Returns
/// - `201 Created` - Successfully created battle with its countries
/// - `400 Bad Request` - Blank name or location, or empty country id list
/// - `404 Not Found` - A referenced country does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/battles",
    tag = BATTLE_TAG,
    request_body = CreateBattleDto,
    responses(
        (status = 201, description = "Successfully created battle", body = BattleDto),
        (status = 400, description = "Invalid battle data", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_battle(
    State(state): State<AppState>,
    Json(payload): Json<CreateBattleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let params = CreateBattleParams::from_dto(payload);

    let battle = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(battle.into_dto())))
}

/// Update a battle.
///
/// Replaces the battle's name, location, and image URL. Country associations
/// are managed through the attach and detach endpoints instead.
#[utoipa::path(
    put,
    path = "/api/battles/{id}",
    tag = BATTLE_TAG,
    params(
        ("id" = i32, Path, description = "Battle ID")
    ),
    request_body = UpdateBattleDto,
    responses(
        (status = 200, description = "Successfully updated battle", body = BattleDto),
        (status = 400, description = "Invalid battle data", body = ErrorDto),
        (status = 404, description = "Battle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_battle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBattleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let params = UpdateBattleParams::from_dto(id, payload);

    let battle = service.update(params).await?;

    Ok((StatusCode::OK, Json(battle.into_dto())))
}

/// Add a country to a battle.
///
/// Idempotent: re-adding a country that already participates leaves the
/// association set unchanged.
///
/// # Returns
/// - `200 OK` - Battle with its updated country list
/// - `404 Not Found` - Battle or country does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/countries/{country_id}",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID"),
        ("country_id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Successfully added country to battle", body = BattleDto),
        (status = 404, description = "Battle or country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_country_to_battle(
    State(state): State<AppState>,
    Path((battle_id, country_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battle = service.add_country(battle_id, country_id).await?;

    Ok((StatusCode::OK, Json(battle.into_dto())))
}

/// Remove a country from a battle.
///
/// Removing a country that does not participate succeeds without change.
///
/// # Returns
/// - `200 OK` - Battle with its updated country list
/// - `404 Not Found` - Battle or country does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/battles/{battle_id}/countries/{country_id}",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID"),
        ("country_id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Successfully removed country from battle", body = BattleDto),
        (status = 404, description = "Battle or country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_country_from_battle(
    State(state): State<AppState>,
    Path((battle_id, country_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battle = service.remove_country(battle_id, country_id).await?;

    Ok((StatusCode::OK, Json(battle.into_dto())))
}

/// Delete a battle.
///
/// Clears the battle's country associations in the same transaction as the
/// row delete. The countries themselves are untouched.
#[utoipa::path(
    delete,
    path = "/api/battles/{id}",
    tag = BATTLE_TAG,
    params(
        ("id" = i32, Path, description = "Battle ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted battle"),
        (status = 404, description = "Battle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_battle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
