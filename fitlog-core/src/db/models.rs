use chrono::NaiveDateTime;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::prelude::{Insertable, Queryable};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::sqlite::{Sqlite, SqliteValue};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::db::schema;

/// Unit kind of an exercise: a repetition count or a held duration.
///
/// Stored as text (`"-"` for quantity, `"seconds"` for duration). Unknown
/// stored values decode as quantity rather than failing the row.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
pub enum Units {
    #[default]
    Quantity,
    Seconds,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Quantity => "-",
            Units::Seconds => "seconds",
        }
    }
}

impl From<&str> for Units {
    fn from(s: &str) -> Self {
        match s.trim() {
            "seconds" => Units::Seconds,
            _ => Units::Quantity,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql<Text, Sqlite> for Units {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.as_str());
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Sqlite> for Units {
    fn from_sql(value: SqliteValue<'_, '_, '_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Sqlite>>::from_sql(value)?;
        Ok(Units::from(s.as_str()))
    }
}

// Category models
#[derive(Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = schema::exercise_categories)]
pub(crate) struct NewCategory<'a> {
    pub name: &'a str,
}

// Exercise models
#[derive(Queryable, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub units: Units,
}

#[derive(Insertable)]
#[diesel(table_name = schema::exercises)]
pub(crate) struct NewExercise<'a> {
    pub name: &'a str,
    pub category_id: i32,
    pub units: Units,
}

// Log models

/// Raw `exercise_logs` row as persisted. Never leaves the repository; it is
/// mapped into [`DataLog`] at the boundary.
#[derive(Queryable, Debug, Clone)]
pub(crate) struct LogRow {
    pub id: i32,
    pub exercise_id: i32,
    pub training_date: String,
    pub sets: i32,
    pub reps: String,
    pub total: i32,
    pub units: Units,
    pub weight: String,
}

#[derive(Insertable)]
#[diesel(table_name = schema::exercise_logs)]
pub(crate) struct NewLogRow<'a> {
    pub exercise_id: i32,
    pub training_date: String,
    pub sets: i32,
    pub reps: String,
    pub total: i32,
    pub units: Units,
    pub weight: &'a str,
}

/// One recorded performance of an exercise, joined with the exercise name and
/// fully decoded: reps as integers, the training date as a datetime.
#[derive(Debug, Clone, PartialEq)]
pub struct DataLog {
    pub id: i32,
    pub exercise_id: i32,
    pub exercise_name: String,
    pub training_date: NaiveDateTime,
    pub sets: i32,
    pub reps: Vec<i32>,
    pub total: i32,
    pub units: Units,
    pub weight: String,
}

impl fmt::Display for DataLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reps = self
            .reps
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(
            f,
            "{}: {} sets [{}] total {}{}",
            self.exercise_name,
            self.sets,
            reps,
            self.total,
            if self.units == Units::Seconds {
                "s"
            } else {
                ""
            }
        )
    }
}

/// Input for [`Repository::add_log`](crate::db::Repository::add_log).
///
/// `reps` is the raw user string; the repository derives the stored encoding,
/// `total` and `sets` from it. A `None` date means "now".
#[derive(Debug, Clone, Default)]
pub struct NewLogEntry {
    pub exercise_name: String,
    pub training_date: Option<NaiveDateTime>,
    pub reps: String,
    pub weight: String,
    pub units: Units,
}

/// Time series of an exercise's totals, ordered by date ascending. The two
/// vectors are parallel: `totals[i]` was recorded on `dates[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotalsSeries {
    pub totals: Vec<i32>,
    pub dates: Vec<NaiveDateTime>,
}
