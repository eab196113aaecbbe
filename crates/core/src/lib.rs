//! Domain types and rules for the planning coach, free of any I/O.
//!
//! Everything here is shared by the repository layer (`dcx-db`) and the
//! HTTP layer (`dcx-api`).

pub mod error;
pub mod listing;
pub mod mode;
pub mod records;
pub mod steps;
pub mod types;
