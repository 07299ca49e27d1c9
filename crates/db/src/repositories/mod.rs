//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods accept any SQLite executor as the first argument: `&DbPool` for
//! standalone calls, or `&mut *tx` so a handler can run several of them in
//! one transaction.

pub mod cat_repo;
pub mod mission_repo;
pub mod target_repo;

pub use cat_repo::CatRepo;
pub use mission_repo::MissionRepo;
pub use target_repo::TargetRepo;
