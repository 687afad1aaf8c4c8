use chrono::NaiveDateTime;
use diesel::prelude::*;
use log::{error, warn};

use crate::db::models::{
    Category, DataLog, Exercise, LogRow, NewCategory, NewExercise, NewLogEntry, NewLogRow,
    TotalsSeries, Units,
};
use crate::db::schema::{exercise_categories, exercise_logs, exercises};
use crate::db::{Repository, day_bounds, now, parse_stored_date, to_stored_date};
use crate::error::{RepoError, Result};
use crate::reps;

// Categories
impl Repository {
    /// All categories, in storage order.
    pub fn fetch_categories(&mut self) -> Result<Vec<Category>> {
        exercise_categories::table
            .load::<Category>(&mut self.conn)
            .map_err(Into::into)
    }

    /// Idempotent insert: adding an existing name is a no-op. An empty name
    /// (after trimming) is ignored.
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            warn!("ignoring empty category name");
            return Ok(());
        }
        upsert_category(&mut self.conn, name)?;
        Ok(())
    }

    /// Delete a category together with its exercises and their logs. Unknown
    /// names are a no-op.
    pub fn delete_category(&mut self, name: &str) -> Result<()> {
        self.conn
            .transaction::<_, RepoError, _>(|conn| {
                let Some(category_id) = exercise_categories::table
                    .filter(exercise_categories::name.eq(name))
                    .select(exercise_categories::id)
                    .first::<i32>(conn)
                    .optional()?
                else {
                    return Ok(());
                };

                let owned = exercises::table
                    .filter(exercises::category_id.eq(category_id))
                    .select(exercises::id);
                diesel::delete(exercise_logs::table.filter(exercise_logs::exercise_id.eq_any(owned)))
                    .execute(conn)?;
                diesel::delete(exercises::table.filter(exercises::category_id.eq(category_id)))
                    .execute(conn)?;
                diesel::delete(exercise_categories::table.find(category_id)).execute(conn)?;
                Ok(())
            })
            .inspect_err(|e| error!("delete_category('{name}') rolled back: {e}"))
    }
}

// Exercises
impl Repository {
    /// Exercises under the named category. Empty for an unknown category.
    pub fn fetch_exercises(&mut self, category: &str) -> Result<Vec<Exercise>> {
        exercises::table
            .inner_join(exercise_categories::table)
            .filter(exercise_categories::name.eq(category))
            .select(exercises::all_columns)
            .load::<Exercise>(&mut self.conn)
            .map_err(Into::into)
    }

    /// Add an exercise, creating its category first if absent. Adding an
    /// existing (name, category) pair is a no-op, as is an empty name.
    pub fn add_exercise(&mut self, category: &str, name: &str, units: Units) -> Result<()> {
        let category = category.trim();
        let name = name.trim();
        if category.is_empty() || name.is_empty() {
            warn!("ignoring exercise with empty name or category");
            return Ok(());
        }
        self.conn
            .transaction::<_, RepoError, _>(|conn| {
                insert_exercise(conn, category, name, units)?;
                Ok(())
            })
            .inspect_err(|e| error!("add_exercise('{category}', '{name}') rolled back: {e}"))
    }

    /// Delete every exercise with this name, in any category, together with
    /// their logs.
    pub fn delete_exercise(&mut self, name: &str) -> Result<()> {
        self.conn
            .transaction::<_, RepoError, _>(|conn| {
                let matching = exercises::table
                    .filter(exercises::name.eq(name))
                    .select(exercises::id);
                diesel::delete(
                    exercise_logs::table.filter(exercise_logs::exercise_id.eq_any(matching)),
                )
                .execute(conn)?;
                diesel::delete(exercises::table.filter(exercises::name.eq(name))).execute(conn)?;
                Ok(())
            })
            .inspect_err(|e| error!("delete_exercise('{name}') rolled back: {e}"))
    }
}

// Logs
impl Repository {
    /// Logs recorded on the calendar day containing `date` (`None` = today),
    /// joined with their exercise names.
    pub fn fetch_day_log(&mut self, date: Option<NaiveDateTime>) -> Result<Vec<DataLog>> {
        let (start, end) = day_bounds(date.unwrap_or_else(now));
        let rows = exercise_logs::table
            .inner_join(exercises::table)
            .filter(exercise_logs::training_date.ge(start))
            .filter(exercise_logs::training_date.lt(end))
            .select((exercise_logs::all_columns, exercises::name))
            .load::<(LogRow, String)>(&mut self.conn)?;
        rows.into_iter()
            .map(|(row, exercise_name)| map_log(row, exercise_name))
            .collect()
    }

    /// Time-series of an exercise's totals, ordered by date ascending, for
    /// charting. Empty if the exercise has no logs.
    pub fn fetch_exercise_totals(&mut self, exercise_id: i32) -> Result<TotalsSeries> {
        let rows = exercise_logs::table
            .filter(exercise_logs::exercise_id.eq(exercise_id))
            .order(exercise_logs::training_date.asc())
            .select((exercise_logs::total, exercise_logs::training_date))
            .load::<(i32, String)>(&mut self.conn)?;

        let mut series = TotalsSeries::default();
        for (total, date) in rows {
            series.totals.push(total);
            series.dates.push(parse_stored_date(&date)?);
        }
        Ok(series)
    }

    /// Record one performance of an exercise. The stored rep encoding,
    /// `total` and `sets` are derived here from the raw rep string; the
    /// exercise name must resolve or nothing is written.
    pub fn add_log(&mut self, entry: &NewLogEntry) -> Result<DataLog> {
        let summary = reps::summarize(&entry.reps);
        let training_date = to_stored_date(entry.training_date.unwrap_or_else(now));
        self.conn
            .transaction::<_, RepoError, _>(|conn| {
                let exercise_id = exercises::table
                    .filter(exercises::name.eq(&entry.exercise_name))
                    .select(exercises::id)
                    .first::<i32>(conn)
                    .optional()?
                    .ok_or_else(|| RepoError::ExerciseNotFound(entry.exercise_name.clone()))?;

                let row: LogRow = diesel::insert_into(exercise_logs::table)
                    .values(&NewLogRow {
                        exercise_id,
                        training_date: training_date.clone(),
                        sets: summary.sets,
                        reps: summary.encoded.clone(),
                        total: summary.total,
                        units: entry.units,
                        weight: &entry.weight,
                    })
                    .get_result(conn)?;
                map_log(row, entry.exercise_name.clone())
            })
            .inspect_err(|e| error!("add_log for '{}' failed: {e}", entry.exercise_name))
    }

    /// Delete a log row by id; unknown ids are a no-op.
    pub fn delete_log(&mut self, log_id: i32) -> Result<()> {
        diesel::delete(exercise_logs::table.find(log_id)).execute(&mut self.conn)?;
        Ok(())
    }

    /// Replace a log's reps, recomputing `total` and `sets` in the same
    /// statement. Unknown ids are a no-op.
    pub fn set_reps(&mut self, log_id: i32, raw_reps: &str) -> Result<()> {
        let summary = reps::summarize(raw_reps);
        diesel::update(exercise_logs::table.find(log_id))
            .set((
                exercise_logs::reps.eq(summary.encoded),
                exercise_logs::total.eq(summary.total),
                exercise_logs::sets.eq(summary.sets),
            ))
            .execute(&mut self.conn)?;
        Ok(())
    }

    pub fn set_weight(&mut self, log_id: i32, weight: &str) -> Result<()> {
        diesel::update(exercise_logs::table.find(log_id))
            .set(exercise_logs::weight.eq(weight))
            .execute(&mut self.conn)?;
        Ok(())
    }

    pub fn set_sets(&mut self, log_id: i32, sets: i32) -> Result<()> {
        diesel::update(exercise_logs::table.find(log_id))
            .set(exercise_logs::sets.eq(sets))
            .execute(&mut self.conn)?;
        Ok(())
    }

    pub fn set_units(&mut self, log_id: i32, units: Units) -> Result<()> {
        diesel::update(exercise_logs::table.find(log_id))
            .set(exercise_logs::units.eq(units))
            .execute(&mut self.conn)?;
        Ok(())
    }
}

fn upsert_category(conn: &mut SqliteConnection, name: &str) -> QueryResult<usize> {
    diesel::insert_into(exercise_categories::table)
        .values(&NewCategory { name })
        .on_conflict_do_nothing()
        .execute(conn)
}

pub(crate) fn insert_exercise(
    conn: &mut SqliteConnection,
    category: &str,
    name: &str,
    units: Units,
) -> QueryResult<()> {
    upsert_category(conn, category)?;
    let category_id = exercise_categories::table
        .filter(exercise_categories::name.eq(category))
        .select(exercise_categories::id)
        .first::<i32>(conn)?;
    diesel::insert_into(exercises::table)
        .values(&NewExercise {
            name,
            category_id,
            units,
        })
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}

/// The single row-to-record mapping at the repository boundary. Positional
/// tuple access never leaks past this point.
fn map_log(row: LogRow, exercise_name: String) -> Result<DataLog> {
    Ok(DataLog {
        id: row.id,
        exercise_id: row.exercise_id,
        exercise_name,
        training_date: parse_stored_date(&row.training_date)?,
        sets: row.sets,
        reps: reps::decode(&row.reps),
        total: row.total,
        units: row.units,
        weight: row.weight,
    })
}
