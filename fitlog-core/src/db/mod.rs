//! Persistence layer: SQLite schema bootstrap and the [`Repository`].
//!
//! The repository owns one exclusive connection for its lifetime. All
//! operations are synchronous; every multi-statement mutation runs in its own
//! transaction and rolls back on a storage error.

pub mod models;
mod operations;
pub(crate) mod schema;
mod seed;

use chrono::{Days, Local, NaiveDateTime, NaiveTime};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{debug, info};

use crate::error::{RepoError, Result};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Storage file used when the caller does not pick one.
pub const DEFAULT_DB_PATH: &str = "training_data.sqlite";

/// All persisted dates go through this one format. Zero-padded and
/// timezone-free, so lexicographic order on the stored text is date order.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Sole point of truth for all entity CRUD over the fitness log store.
pub struct Repository {
    conn: SqliteConnection,
}

impl Repository {
    /// Open (creating if needed) the store at `path`. On a store with no
    /// tables the schema is materialized and the default taxonomy seeded;
    /// reopening an initialized store re-runs nothing.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_inner(path, true)
    }

    /// Open the default storage file in the working directory.
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_DB_PATH)
    }

    /// In-memory store, seeded. Behaves like [`Repository::open`] minus
    /// persistence across runs.
    pub fn open_in_memory() -> Result<Self> {
        Self::open_inner(":memory:", true)
    }

    /// In-memory store with the schema only, no seed data. Test support for
    /// scenarios that start from an empty store.
    pub fn open_in_memory_blank() -> Result<Self> {
        Self::open_inner(":memory:", false)
    }

    fn open_inner(path: &str, seed_on_first_run: bool) -> Result<Self> {
        let mut conn =
            SqliteConnection::establish(path).map_err(|source| RepoError::Open {
                path: path.to_string(),
                source,
            })?;
        conn.batch_execute("PRAGMA foreign_keys = ON;")?;

        // First run is "no tables yet", checked before migrations touch the
        // file so reopening never re-triggers the seed.
        let fresh = table_count(&mut conn)? == 0;

        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| RepoError::Migration(e.to_string()))?;
        debug!("schema up to date for '{path}'");

        let mut repo = Self { conn };
        if fresh && seed_on_first_run {
            info!("empty store at '{path}', loading default exercises");
            repo.seed_default_data()?;
        }
        Ok(repo)
    }

    fn seed_default_data(&mut self) -> Result<()> {
        self.conn.transaction::<_, RepoError, _>(|conn| {
            for (category, exercises) in seed::DEFAULT_TAXONOMY {
                for (name, units) in *exercises {
                    operations::insert_exercise(conn, category, name, *units)?;
                }
            }
            Ok(())
        })?;
        debug!("default taxonomy seeded");
        Ok(())
    }

    /// Release the underlying connection. Taking the repository by value
    /// makes use-after-destroy unrepresentable.
    pub fn destroy(self) {}
}

#[derive(QueryableByName)]
struct TableCount {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

fn table_count(conn: &mut SqliteConnection) -> Result<i64> {
    let row: TableCount = diesel::sql_query(
        "SELECT COUNT(*) AS count FROM sqlite_master WHERE type = 'table'",
    )
    .get_result(conn)?;
    Ok(row.count)
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn to_stored_date(date: NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn parse_stored_date(stored: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(stored, DATE_FORMAT)
        .map_err(|_| RepoError::MalformedDate(stored.to_string()))
}

/// Stored-text bounds of the calendar day containing `date`: midnight
/// inclusive to next midnight exclusive.
pub(crate) fn day_bounds(date: NaiveDateTime) -> (String, String) {
    let day = date.date();
    let start = day.and_time(NaiveTime::MIN);
    let end = day
        .checked_add_days(Days::new(1))
        .unwrap_or(day)
        .and_time(NaiveTime::MIN);
    (to_stored_date(start), to_stored_date(end))
}
