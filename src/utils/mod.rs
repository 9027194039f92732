//! Utility modules for the Taskgrid API.
//!
//! This module contains shared utilities used throughout the application:
//!
//! - [`errors`]: Application error types and handling
//! - [`jwt`]: JWT token creation and verification
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
