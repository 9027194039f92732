//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request carrying the `accessToken` cookie
//! 2. [`auth::CurrentUser`] validates the token and extracts its claims
//! 3. [`auth::AdminUser`] additionally requires the admin flag
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AdminUser, CurrentUser};
//!
//! // Any authenticated user
//! async fn get_profile(user: CurrentUser) -> impl IntoResponse {
//!     let user_id = user.0.subject_id()?;
//!     // ...
//! }
//!
//! // Administrators only
//! async fn promote_user(admin: AdminUser) -> impl IntoResponse {
//!     // Only executes for tokens carrying the admin flag
//! }
//! ```

pub mod auth;
