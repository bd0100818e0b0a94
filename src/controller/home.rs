/// Tag for grouping the landing endpoint in OpenAPI documentation
pub static HOME_TAG: &str = "home";

static WELCOME_MESSAGE: &str = "Welcome to my WWII web application, where you can learn a lot about the biggest armed conflict of the XX century!";

/// Landing endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Welcome message", body = String)
    ),
)]
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
