use crate::api::handlers::bearer_token;
use crate::auth::{Account, AuthResult, AuthService, Role};
use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

/// Public view of an account: everything except the password.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Profile {
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    role: Role,
}

impl Profile {
    fn from_account(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            email: account.email.clone(),
            role: account.role,
        }
    }
}

#[utoipa::path(
    get,
    path= "/api/profile",
    responses (
        (status = 200, description = "Profile for the token's username", body = [Profile]),
        (status = 401, description = "Missing or invalid bearer token", body = [AuthResult]),
        (status = 404, description = "Token names an unknown user", body = [AuthResult]),
    ),
    tag= "auth"
)]
#[instrument(skip(auth, headers))]
pub async fn profile(
    Extension(auth): Extension<Arc<AuthService>>,
    headers: HeaderMap,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(AuthResult::failure(
                "Authorization header missing or invalid",
            )),
        )
            .into_response();
    };

    if !auth.validate_token(Some(token)) {
        debug!("Structurally invalid token presented");

        return (
            StatusCode::UNAUTHORIZED,
            Json(AuthResult::failure("Invalid token")),
        )
            .into_response();
    }

    let account = auth
        .username_from_token(token)
        .and_then(|username| auth.user_details(username));

    match account {
        Some(account) => (StatusCode::OK, Json(Profile::from_account(account))).into_response(),

        None => (
            StatusCode::NOT_FOUND,
            Json(AuthResult::failure("User not found")),
        )
            .into_response(),
    }
}
