//! FitLog core: the persistence and data-access layer of a personal
//! fitness-logging application.
//!
//! Callers construct a [`db::Repository`] over a SQLite file (or in-memory
//! store), log exercises with rep lists under categories, and read back
//! per-day logs and per-exercise totals series for charting.

pub mod db;
pub mod error;
pub mod reps;

pub use db::Repository;
pub use db::models::{Category, DataLog, Exercise, NewLogEntry, TotalsSeries, Units};
pub use error::{RepoError, Result};
