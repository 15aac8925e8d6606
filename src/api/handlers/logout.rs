use crate::auth::AuthResult;
use axum::response::Json;

#[utoipa::path(
    post,
    path= "/api/logout",
    responses (
        (status = 200, description = "Logout acknowledged", body = [AuthResult]),
    ),
    tag= "auth"
)]
// Tokens are not stored server-side, so there is nothing to invalidate; the
// endpoint only acknowledges so clients can clear their local state.
pub async fn logout() -> Json<AuthResult> {
    Json(AuthResult {
        success: true,
        message: "Logout successful".to_string(),
        token: None,
        role: None,
    })
}
