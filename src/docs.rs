use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::middleware::auth::ACCESS_TOKEN_COOKIE;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, RegisterRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::users::controller::promote_user,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and logout"),
        (name = "Users", description = "User administration endpoints")
    ),
    info(
        title = "Taskgrid API",
        version = "0.1.0",
        description = "Task management REST API built with Rust, Axum, and PostgreSQL featuring cookie-based JWT authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(ACCESS_TOKEN_COOKIE))),
            )
        }
    }
}
