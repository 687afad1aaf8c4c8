use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};

use fitlog::db::DEFAULT_DB_PATH;
use fitlog::{NewLogEntry, Repository, Units};

#[derive(Parser, Debug)]
#[command(version, about = "FitLog - personal fitness log", long_about = None)]
struct Args {
    /// Path to the storage file
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List exercise categories
    Categories,
    /// Add a category
    AddCategory { name: String },
    /// Delete a category and everything under it
    DeleteCategory { name: String },
    /// List exercises in a category
    Exercises { category: String },
    /// Add an exercise, creating the category if needed
    AddExercise {
        category: String,
        name: String,
        /// Track this exercise as a held duration instead of a rep count
        #[arg(long)]
        seconds: bool,
    },
    /// Delete an exercise by name (matches across categories)
    DeleteExercise { name: String },
    /// Record a performance of an exercise
    Log {
        exercise: String,
        /// Comma-separated rep list, e.g. "10,10,8"
        reps: String,
        #[arg(long, default_value = "")]
        weight: String,
        /// Date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        seconds: bool,
    },
    /// Show the log for a day (defaults to today)
    Day { date: Option<String> },
    /// Show an exercise's totals over time
    Totals { exercise_id: i32 },
    /// Delete a log entry by id
    DeleteLog { id: i32 },
    /// Edit fields of a log entry in place
    Edit {
        id: i32,
        /// New rep list; total and set count are recomputed
        #[arg(long)]
        reps: Option<String>,
        #[arg(long)]
        weight: Option<String>,
        #[arg(long)]
        sets: Option<i32>,
        /// "quantity" or "seconds"
        #[arg(long)]
        units: Option<String>,
    },
}

fn parse_date(input: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .with_context(|| format!("unrecognized date '{input}'"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut repo = Repository::open(&args.db)?;

    match args.command {
        Commands::Categories => {
            for category in repo.fetch_categories()? {
                println!("{}", category.name);
            }
        }
        Commands::AddCategory { name } => repo.add_category(&name)?,
        Commands::DeleteCategory { name } => repo.delete_category(&name)?,
        Commands::Exercises { category } => {
            for exercise in repo.fetch_exercises(&category)? {
                println!("{} ({}) [{}]", exercise.name, exercise.units, exercise.id);
            }
        }
        Commands::AddExercise {
            category,
            name,
            seconds,
        } => {
            let units = if seconds { Units::Seconds } else { Units::Quantity };
            repo.add_exercise(&category, &name, units)?;
        }
        Commands::DeleteExercise { name } => repo.delete_exercise(&name)?,
        Commands::Log {
            exercise,
            reps,
            weight,
            date,
            seconds,
        } => {
            let training_date = date.as_deref().map(parse_date).transpose()?;
            let units = if seconds { Units::Seconds } else { Units::Quantity };
            let log = repo.add_log(&NewLogEntry {
                exercise_name: exercise,
                training_date,
                reps,
                weight,
                units,
            })?;
            println!("recorded #{}: {log}", log.id);
        }
        Commands::Day { date } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            for log in repo.fetch_day_log(date)? {
                println!("#{} {log}", log.id);
            }
        }
        Commands::Totals { exercise_id } => {
            let series = repo.fetch_exercise_totals(exercise_id)?;
            for (total, date) in series.totals.iter().zip(&series.dates) {
                println!("{date}  {total}");
            }
        }
        Commands::DeleteLog { id } => repo.delete_log(id)?,
        Commands::Edit {
            id,
            reps,
            weight,
            sets,
            units,
        } => {
            if let Some(reps) = reps {
                repo.set_reps(id, &reps)?;
            }
            if let Some(weight) = weight {
                repo.set_weight(id, &weight)?;
            }
            if let Some(sets) = sets {
                repo.set_sets(id, sets)?;
            }
            if let Some(units) = units {
                repo.set_units(id, Units::from(units.as_str()))?;
            }
        }
    }

    repo.destroy();
    Ok(())
}
