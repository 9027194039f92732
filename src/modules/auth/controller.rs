use axum::Json;
use axum::extract::State;
use axum::http::{
    StatusCode,
    header::{self, HeaderName},
};
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::{CurrentUser, access_token_cookie, clear_access_token_cookie};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AuthResponse, LoginRequest, RegisterRequest};

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created, access token set as a cookie", body = AuthResponse),
        (status = 400, description = "Bad request - invalid username or weak password", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<AuthResponse>), AppError> {
    let result = state.auth.register(&dto.username, &dto.password).await?;
    let cookie = access_token_cookie(&result.token, state.tokens.expiry_secs());

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse::from(&result)),
    ))
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, access token set as a cookie", body = AuthResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Invalid username or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<([(HeaderName, String); 1], Json<AuthResponse>), AppError> {
    let result = state.auth.login(&dto.username, &dto.password).await?;
    let cookie = access_token_cookie(&result.token, state.tokens.expiry_secs());

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse::from(&result)),
    ))
}

/// Log out by clearing the access token cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out, access token cookie cleared"),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout(_user: CurrentUser) -> (StatusCode, [(HeaderName, String); 1]) {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear_access_token_cookie())],
    )
}
