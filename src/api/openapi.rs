use crate::api::handlers::{health, login, logout, profile};
use crate::auth::{AuthResult, Credentials, Role};
use axum::response::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health::health, login::login, logout::logout, profile::profile),
    components(schemas(
        Credentials,
        AuthResult,
        Role,
        health::Health,
        profile::Profile
    )),
    tags(
        (name = "auth", description = "Login, logout and profile lookup"),
        (name = "health", description = "Service liveness")
    )
)]
pub struct ApiDoc;

// axum handler serving the generated document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
