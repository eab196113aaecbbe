//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument.

pub mod project_repo;
pub mod record_repo;

pub use project_repo::ProjectRepo;
pub use record_repo::RecordRepo;
