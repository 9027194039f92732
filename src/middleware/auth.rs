use anyhow::anyhow;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Name of the cookie carrying the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Builds the `Set-Cookie` value that hands an access token to the browser.
pub fn access_token_cookie(token: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age={}",
        ACCESS_TOKEN_COOKIE, token, max_age_secs
    )
}

/// Builds the `Set-Cookie` value that removes the access token cookie.
pub fn clear_access_token_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age=0",
        ACCESS_TOKEN_COOKIE
    )
}

/// Extractor for any authenticated user. Reads the access token cookie and
/// validates it against the signing key in [`AppState`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or_else(|| AppError::unauthorized(anyhow!("missing access token")))?;

        let claims = state.tokens.decode(&token)?;
        Ok(CurrentUser(claims))
    }
}

/// Extractor for administrators. Rejects valid tokens without the admin flag.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(claims) = CurrentUser::from_request_parts(parts, state).await?;

        if !claims.is_admin {
            return Err(AppError::forbidden(anyhow!("admin access required")));
        }

        Ok(AdminUser(claims))
    }
}
