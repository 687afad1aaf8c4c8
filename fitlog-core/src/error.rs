use thiserror::Error;

/// Errors surfaced by the repository layer.
///
/// Validation problems (empty names, unparseable rep tokens) never show up
/// here; they coerce to safe defaults inside the repository. What remains is
/// the referential check on log creation plus storage-level failures.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("exercise '{0}' does not exist")]
    ExerciseNotFound(String),

    #[error("could not open database at '{path}': {source}")]
    Open {
        path: String,
        source: diesel::ConnectionError,
    },

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("malformed training date in store: '{0}'")]
    MalformedDate(String),

    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}

pub type Result<T> = std::result::Result<T, RepoError>;
