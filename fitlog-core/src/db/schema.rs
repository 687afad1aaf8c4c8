diesel::table! {
    exercise_categories (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    exercises (id) {
        id -> Integer,
        name -> Text,
        category_id -> Integer,
        units -> Text,
    }
}

diesel::table! {
    exercise_logs (id) {
        id -> Integer,
        exercise_id -> Integer,
        training_date -> Text,
        sets -> Integer,
        reps -> Text,
        total -> Integer,
        units -> Text,
        weight -> Text,
    }
}

diesel::joinable!(exercises -> exercise_categories (category_id));
diesel::joinable!(exercise_logs -> exercises (exercise_id));

diesel::allow_tables_to_appear_in_same_query!(exercise_categories, exercises, exercise_logs);
