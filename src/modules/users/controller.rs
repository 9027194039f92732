use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::auth::AdminUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Promote a user to administrator (admins only)
#[utoipa::path(
    patch,
    path = "/api/users/{username}/promote",
    params(
        ("username" = String, Path, description = "Username of the account to promote")
    ),
    responses(
        (status = 200, description = "User promoted to administrator"),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("cookie_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, admin))]
pub async fn promote_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(username): Path<String>,
) -> Result<StatusCode, AppError> {
    let promoter_id = admin.0.subject_id()?;
    state.users.promote(promoter_id, &username).await?;
    Ok(StatusCode::OK)
}
