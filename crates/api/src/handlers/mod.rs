//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input, delegate to the service facade, and map errors
//! via [`AppError`](crate::error::AppError).

pub mod movie;
