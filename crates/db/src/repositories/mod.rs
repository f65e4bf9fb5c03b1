//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async SQL methods.
//! Methods take any Postgres executor, so the same call works against the
//! pool for plain reads and against `&mut *tx` inside a transaction.

pub mod cat_repo;
pub mod mission_repo;
pub mod target_repo;

pub use cat_repo::CatRepo;
pub use mission_repo::MissionRepo;
pub use target_repo::TargetRepo;
