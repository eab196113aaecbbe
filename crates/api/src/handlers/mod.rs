//! Request handlers.
//!
//! Handlers validate the request shape, delegate to the repositories in
//! `dcx_db` and map errors via [`AppError`](crate::error::AppError).

pub mod project;
pub mod records;
