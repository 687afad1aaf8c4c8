//! Rep-list parsing and the derived fields stored alongside it.
//!
//! User-facing rep input is a free-form comma-separated list, optionally
//! bracketed ("10, 10, 8" or "[10,10,8]"). Parsing is lenient: tokens that are
//! not non-negative integers are dropped silently, and an all-invalid input
//! yields the empty list rather than an error. The persisted column is a JSON
//! integer array.

/// Result of deriving the persisted representation from a raw rep string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepsSummary {
    /// JSON encoding stored in the `reps` column.
    pub encoded: String,
    /// Sum of all rep values.
    pub total: i32,
    /// Number of rep entries.
    pub sets: i32,
}

/// Leniently parse a free-form rep list. Invalid and negative tokens are
/// dropped; the empty-list result is a valid outcome, not an error.
pub fn parse_rep_list(input: &str) -> Vec<i32> {
    input
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .filter_map(|tok| tok.trim().parse::<i32>().ok())
        .filter(|n| *n >= 0)
        .collect()
}

/// Encode a rep list for storage.
pub fn encode(reps: &[i32]) -> String {
    serde_json::to_string(reps).unwrap_or_else(|_| String::from("[]"))
}

/// Decode a stored rep column. Malformed text decodes to `[0]` so that a
/// damaged row still renders instead of aborting a whole day's fetch.
pub fn decode(stored: &str) -> Vec<i32> {
    serde_json::from_str(stored).unwrap_or_else(|_| vec![0])
}

/// Derive everything the log row stores for a raw rep string. This is the one
/// place `total` and `sets` are computed; callers never supply them.
pub fn summarize(input: &str) -> RepsSummary {
    let reps = parse_rep_list(input);
    RepsSummary {
        encoded: encode(&reps),
        total: reps.iter().sum(),
        sets: reps.len() as i32,
    }
}
