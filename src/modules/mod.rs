pub mod auth;
pub mod users;

pub use self::auth::model::{LoginRequest, RegisterRequest};
pub use self::users::model::User;
