use crate::auth::{AuthResult, AuthService, Credentials};
use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[utoipa::path(
    post,
    path= "/api/login",
    request_body = Credentials,
    responses (
        (status = 200, description = "Login successful", body = [AuthResult], content_type = "application/json"),
        (status = 401, description = "Credentials rejected", body = [AuthResult]),
        (status = 400, description = "Request body could not be decoded", body = [AuthResult]),
    ),
    tag= "auth"
)]
#[instrument(skip(auth, payload))]
pub async fn login(
    Extension(auth): Extension<Arc<AuthService>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> (StatusCode, Json<AuthResult>) {
    let credentials = match payload {
        Ok(Json(credentials)) => credentials,
        Err(rejection) => {
            debug!("Rejected login payload: {rejection}");

            return (
                StatusCode::BAD_REQUEST,
                Json(AuthResult::failure("Invalid request format")),
            );
        }
    };

    let result = auth.authenticate(Some(&credentials));

    if result.success {
        (StatusCode::OK, Json(result))
    } else {
        warn!("Login rejected: {}", result.message);

        (StatusCode::UNAUTHORIZED, Json(result))
    }
}
