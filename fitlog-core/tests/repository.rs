use chrono::{NaiveDate, NaiveDateTime};

use fitlog::{NewLogEntry, RepoError, Repository, Units};

fn blank() -> Repository {
    Repository::open_in_memory_blank().expect("in-memory store")
}

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn entry(exercise: &str, reps: &str, date: NaiveDateTime) -> NewLogEntry {
    NewLogEntry {
        exercise_name: exercise.to_string(),
        training_date: Some(date),
        reps: reps.to_string(),
        ..Default::default()
    }
}

#[test]
fn fresh_store_is_seeded_with_default_taxonomy() {
    let mut repo = Repository::open_in_memory().unwrap();

    let names: Vec<String> = repo
        .fetch_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(
        names,
        [
            "Push",
            "Pull",
            "Legs",
            "Core",
            "Dips",
            "Inversions",
            "Handstand",
            "Lever"
        ]
    );

    let push = repo.fetch_exercises("Push").unwrap();
    assert_eq!(push.len(), 4);
    assert!(push.iter().any(|e| e.name == "Push-ups"));
}

#[test]
fn seeding_happens_exactly_once_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitlog.sqlite");
    let path = path.to_str().unwrap();

    let mut repo = Repository::open(path).unwrap();
    repo.add_category("Extra").unwrap();
    repo.destroy();

    let mut reopened = Repository::open(path).unwrap();
    let names: Vec<String> = reopened
        .fetch_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names.len(), 9);
    assert!(names.contains(&"Extra".to_string()));
    // the seed loop did not run again
    assert_eq!(reopened.fetch_exercises("Push").unwrap().len(), 4);
}

#[test]
fn adding_a_category_twice_keeps_one_row() {
    let mut repo = blank();
    repo.add_category("Mobility").unwrap();
    repo.add_category("Mobility").unwrap();

    let categories = repo.fetch_categories().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Mobility");
}

#[test]
fn empty_category_name_is_ignored() {
    let mut repo = blank();
    repo.add_category("   ").unwrap();
    assert!(repo.fetch_categories().unwrap().is_empty());
}

#[test]
fn add_exercise_creates_missing_category() {
    let mut repo = blank();
    repo.add_exercise("NewCat", "Burpees", Units::Quantity).unwrap();

    let categories = repo.fetch_categories().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "NewCat");

    let exercises = repo.fetch_exercises("NewCat").unwrap();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].name, "Burpees");
}

#[test]
fn same_exercise_name_may_exist_in_different_categories() {
    let mut repo = blank();
    repo.add_exercise("Push", "Holds", Units::Quantity).unwrap();
    repo.add_exercise("Core", "Holds", Units::Seconds).unwrap();
    // same (name, category) pair is a no-op
    repo.add_exercise("Push", "Holds", Units::Quantity).unwrap();

    assert_eq!(repo.fetch_exercises("Push").unwrap().len(), 1);
    assert_eq!(repo.fetch_exercises("Core").unwrap().len(), 1);
    assert_eq!(repo.fetch_exercises("Core").unwrap()[0].units, Units::Seconds);
}

#[test]
fn fetch_exercises_of_unknown_category_is_empty() {
    let mut repo = blank();
    assert!(repo.fetch_exercises("Nope").unwrap().is_empty());
}

#[test]
fn deleting_a_category_cascades_to_exercises_and_logs() {
    let mut repo = blank();
    repo.add_exercise("Push", "Push-ups", Units::Quantity).unwrap();
    repo.add_exercise("Push", "Dips", Units::Quantity).unwrap();
    repo.add_exercise("Legs", "Squats", Units::Quantity).unwrap();
    let day = dt(2026, 3, 1, 10, 0);
    repo.add_log(&entry("Push-ups", "10,10", day)).unwrap();
    repo.add_log(&entry("Squats", "20", day)).unwrap();

    repo.delete_category("Push").unwrap();

    assert!(repo.fetch_exercises("Push").unwrap().is_empty());
    let names: Vec<String> = repo
        .fetch_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Legs"]);

    // Push-ups log is gone, the Squats log survives
    let logs = repo.fetch_day_log(Some(day)).unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].exercise_name, "Squats");

    // deleting an absent category is a no-op
    repo.delete_category("Push").unwrap();
}

#[test]
fn deleting_an_exercise_matches_by_name_across_categories() {
    let mut repo = blank();
    repo.add_exercise("Push", "Holds", Units::Quantity).unwrap();
    repo.add_exercise("Core", "Holds", Units::Seconds).unwrap();
    let day = dt(2026, 3, 2, 9, 0);
    repo.add_log(&entry("Holds", "5,5", day)).unwrap();

    repo.delete_exercise("Holds").unwrap();

    assert!(repo.fetch_exercises("Push").unwrap().is_empty());
    assert!(repo.fetch_exercises("Core").unwrap().is_empty());
    assert!(repo.fetch_day_log(Some(day)).unwrap().is_empty());
}

#[test]
fn add_log_derives_total_and_sets_from_reps() {
    let mut repo = blank();
    repo.add_exercise("Push", "Push-ups", Units::Quantity).unwrap();
    let day = dt(2026, 3, 3, 18, 30);

    let log = repo.add_log(&entry("Push-ups", "10,10,8", day)).unwrap();
    assert_eq!(log.total, 28);
    assert_eq!(log.sets, 3);
    assert_eq!(log.reps, vec![10, 10, 8]);

    let fetched = repo.fetch_day_log(Some(day)).unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].total, 28);
    assert_eq!(fetched[0].sets, 3);
    assert_eq!(fetched[0].exercise_name, "Push-ups");
    assert_eq!(fetched[0].training_date, day);
}

#[test]
fn add_log_for_unknown_exercise_fails_and_writes_nothing() {
    let mut repo = blank();
    repo.add_exercise("Push", "Push-ups", Units::Quantity).unwrap();
    let day = dt(2026, 3, 4, 12, 0);

    let err = repo.add_log(&entry("Imaginary", "10", day)).unwrap_err();
    assert!(matches!(err, RepoError::ExerciseNotFound(name) if name == "Imaginary"));
    assert!(repo.fetch_day_log(Some(day)).unwrap().is_empty());
}

#[test]
fn empty_rep_input_stores_zero_sets_and_total() {
    let mut repo = blank();
    repo.add_exercise("Core", "Plank", Units::Seconds).unwrap();
    let day = dt(2026, 3, 5, 7, 0);

    let log = repo
        .add_log(&NewLogEntry {
            exercise_name: "Plank".to_string(),
            training_date: Some(day),
            reps: "not numbers".to_string(),
            units: Units::Seconds,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(log.reps, Vec::<i32>::new());
    assert_eq!(log.total, 0);
    assert_eq!(log.sets, 0);
    assert_eq!(log.units, Units::Seconds);
}

#[test]
fn set_reps_replaces_reps_and_recomputes_derived_fields() {
    let mut repo = blank();
    repo.add_exercise("Legs", "Squats", Units::Quantity).unwrap();
    let day = dt(2026, 3, 6, 8, 0);
    let log = repo.add_log(&entry("Squats", "5,5", day)).unwrap();

    repo.set_reps(log.id, "8,8,8,8").unwrap();

    let updated = &repo.fetch_day_log(Some(day)).unwrap()[0];
    assert_eq!(updated.reps, vec![8, 8, 8, 8]);
    assert_eq!(updated.total, 32);
    assert_eq!(updated.sets, 4);
}

#[test]
fn per_field_updates_apply_in_place() {
    let mut repo = blank();
    repo.add_exercise("Legs", "Squats", Units::Quantity).unwrap();
    let day = dt(2026, 3, 7, 8, 0);
    let log = repo.add_log(&entry("Squats", "5,5", day)).unwrap();

    repo.set_weight(log.id, "50").unwrap();
    repo.set_sets(log.id, 4).unwrap();
    repo.set_units(log.id, Units::Seconds).unwrap();

    let updated = &repo.fetch_day_log(Some(day)).unwrap()[0];
    assert_eq!(updated.id, log.id);
    assert_eq!(updated.weight, "50");
    assert_eq!(updated.sets, 4);
    assert_eq!(updated.units, Units::Seconds);
    // reps untouched by the single-field updates
    assert_eq!(updated.reps, vec![5, 5]);
}

#[test]
fn mutating_a_missing_log_id_is_a_silent_no_op() {
    let mut repo = blank();
    repo.set_weight(999, "10").unwrap();
    repo.set_reps(999, "1,2,3").unwrap();
    repo.set_sets(999, 2).unwrap();
    repo.set_units(999, Units::Seconds).unwrap();
    repo.delete_log(999).unwrap();
}

#[test]
fn delete_log_removes_the_row_and_repeats_are_no_ops() {
    let mut repo = blank();
    repo.add_exercise("Dips", "Dips", Units::Quantity).unwrap();
    let day = dt(2026, 3, 8, 17, 0);
    let log = repo.add_log(&entry("Dips", "12", day)).unwrap();

    repo.delete_log(log.id).unwrap();
    assert!(repo.fetch_day_log(Some(day)).unwrap().is_empty());
    repo.delete_log(log.id).unwrap();
}

#[test]
fn day_log_matches_the_whole_calendar_day() {
    let mut repo = blank();
    repo.add_exercise("Push", "Push-ups", Units::Quantity).unwrap();
    repo.add_log(&entry("Push-ups", "10", dt(2026, 3, 9, 9, 0))).unwrap();
    repo.add_log(&entry("Push-ups", "12", dt(2026, 3, 9, 17, 0))).unwrap();
    repo.add_log(&entry("Push-ups", "14", dt(2026, 3, 10, 0, 0))).unwrap();

    // a fetch at any time of day sees both same-day entries
    let logs = repo.fetch_day_log(Some(dt(2026, 3, 9, 12, 34))).unwrap();
    assert_eq!(logs.len(), 2);

    let next_day = repo.fetch_day_log(Some(dt(2026, 3, 10, 23, 59))).unwrap();
    assert_eq!(next_day.len(), 1);
    assert_eq!(next_day[0].total, 14);
}

#[test]
fn totals_series_is_ordered_by_date_ascending() {
    let mut repo = blank();
    repo.add_exercise("Pull", "Pull-ups", Units::Quantity).unwrap();
    // inserted out of chronological order
    repo.add_log(&entry("Pull-ups", "8", dt(2026, 3, 12, 10, 0))).unwrap();
    repo.add_log(&entry("Pull-ups", "5", dt(2026, 3, 10, 10, 0))).unwrap();
    repo.add_log(&entry("Pull-ups", "6", dt(2026, 3, 11, 10, 0))).unwrap();

    let exercise_id = repo.fetch_exercises("Pull").unwrap()[0].id;
    let series = repo.fetch_exercise_totals(exercise_id).unwrap();

    assert_eq!(series.totals, vec![5, 6, 8]);
    assert_eq!(series.totals.len(), series.dates.len());
    for pair in series.dates.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn totals_series_of_an_unlogged_exercise_is_empty() {
    let mut repo = blank();
    repo.add_exercise("Pull", "Pull-ups", Units::Quantity).unwrap();
    let exercise_id = repo.fetch_exercises("Pull").unwrap()[0].id;

    let series = repo.fetch_exercise_totals(exercise_id).unwrap();
    assert!(series.totals.is_empty());
    assert!(series.dates.is_empty());
}

#[test]
fn rep_lists_round_trip_through_set_and_fetch() {
    let mut repo = blank();
    repo.add_exercise("Legs", "Squats", Units::Quantity).unwrap();
    let day = dt(2026, 3, 13, 8, 0);
    let log = repo.add_log(&entry("Squats", "1,2,3", day)).unwrap();

    for reps in [vec![], vec![0], vec![10, 0, 42], vec![1; 20]] {
        let raw = reps
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",");
        repo.set_reps(log.id, &raw).unwrap();
        let fetched = &repo.fetch_day_log(Some(day)).unwrap()[0];
        assert_eq!(fetched.reps, reps);
        assert_eq!(fetched.total, reps.iter().sum::<i32>());
        assert_eq!(fetched.sets, reps.len() as i32);
    }
}
