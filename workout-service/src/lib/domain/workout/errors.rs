use thiserror::Error;

use crate::domain::workout::models::WorkoutId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkoutIdError {
    #[error("invalid workout id: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkoutTitleError {
    #[error("title is required")]
    Empty,

    #[error("title must be at most {max} characters long, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for a single entry or for the entry list as a whole.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EntryError {
    #[error("exercise name is required")]
    EmptyExerciseName,

    #[error("exercise name must be at most {max} characters, got {actual}")]
    ExerciseNameTooLong { max: usize, actual: usize },

    #[error("sets must be positive, got {0}")]
    NonPositiveSets(i32),

    #[error("entry must have exactly one of reps or duration_seconds")]
    RepsOrDuration,

    #[error("reps must be positive, got {0}")]
    NonPositiveReps(i32),

    #[error("duration_seconds must be positive, got {0}")]
    NonPositiveDuration(i32),

    #[error("weight must not be negative, got {0}")]
    NegativeWeight(f64),

    #[error("order_index {0} is used more than once")]
    DuplicateOrderIndex(i32),
}

#[derive(Debug, Clone, Error)]
pub enum WorkoutError {
    #[error("Invalid workout id: {0}")]
    InvalidId(#[from] WorkoutIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] WorkoutTitleError),

    #[error("Invalid entry: {0}")]
    InvalidEntry(#[from] EntryError),

    #[error("{field} must not be negative, got {value}")]
    NegativeMetric { field: &'static str, value: i32 },

    #[error("authentication required")]
    AuthenticationRequired,

    #[error("Workout not found: {0}")]
    NotFound(WorkoutId),

    #[error("workout {0} belongs to another user")]
    Forbidden(WorkoutId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
