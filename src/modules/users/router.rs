use axum::{Router, routing::patch};

use crate::modules::users::controller::promote_user;
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/{username}/promote", patch(promote_user))
}
