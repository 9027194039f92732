//! Configuration modules for the Taskgrid API.
//!
//! Each submodule handles a specific aspect of configuration, typically
//! loaded from environment variables.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`jwt`]: JWT authentication configuration
//!
//! # Environment Variables
//!
//! Most configuration is loaded from environment variables. See each
//! submodule for specific variable names and their defaults.

pub mod cors;
pub mod database;
pub mod jwt;
