//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs` with the generated document at
//! `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, state::AppState};

/// Builds the application's HTTP router with all catalog endpoints and
/// Swagger UI documentation.
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Frontline",
            description = "WWII reference catalog API"
        ),
        tags(
            (name = controller::home::HOME_TAG, description = "Landing route"),
            (name = controller::country::COUNTRY_TAG, description = "Country catalog routes"),
            (name = controller::figure::FIGURE_TAG, description = "Historical figure catalog routes"),
            (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle catalog routes"),
            (name = controller::battle::BATTLE_TAG, description = "Battle catalog routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::home::welcome))
        .routes(routes!(
            controller::country::get_countries,
            controller::country::create_country
        ))
        .routes(routes!(
            controller::country::get_country_by_id,
            controller::country::update_country,
            controller::country::delete_country
        ))
        .routes(routes!(
            controller::figure::get_figures,
            controller::figure::create_figure
        ))
        .routes(routes!(
            controller::figure::get_figure_by_id,
            controller::figure::update_figure,
            controller::figure::delete_figure
        ))
        .routes(routes!(controller::figure::get_figures_by_country))
        .routes(routes!(controller::figure::get_figures_by_side))
        .routes(routes!(
            controller::vehicle::get_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle_by_id,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(controller::vehicle::get_vehicles_by_country))
        .routes(routes!(
            controller::battle::get_battles,
            controller::battle::create_battle
        ))
        .routes(routes!(
            controller::battle::get_battle_by_id,
            controller::battle::update_battle,
            controller::battle::delete_battle
        ))
        .routes(routes!(controller::battle::get_battles_by_country))
        .routes(routes!(
            controller::battle::add_country_to_battle,
            controller::battle::remove_country_from_battle
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
