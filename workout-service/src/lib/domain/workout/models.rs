use std::collections::HashSet;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::UserId;
use crate::domain::workout::errors::EntryError;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::errors::WorkoutIdError;
use crate::domain::workout::errors::WorkoutTitleError;

/// Workout aggregate: a header plus its entries, ordered by `order_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutId,
    pub user_id: UserId,
    pub title: WorkoutTitle,
    pub description: String,
    pub duration_minutes: Metric,
    pub calories_burned: Metric,
    pub entries: WorkoutEntries,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkoutId(pub i64);

impl WorkoutId {
    /// Parse an id taken from a URL path segment.
    ///
    /// # Errors
    /// * `Invalid` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, WorkoutIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(WorkoutIdError::Invalid(s.to_string())),
        }
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Workout title, non-empty and at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutTitle(String);

impl WorkoutTitle {
    const MAX_LENGTH: usize = 255;

    pub fn new(title: String) -> Result<Self, WorkoutTitleError> {
        let length = title.chars().count();
        if title.trim().is_empty() {
            Err(WorkoutTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(WorkoutTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Non-negative whole quantity such as minutes or calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metric(i32);

impl Metric {
    /// # Errors
    /// * `NegativeMetric` - `value` is below zero; `field` names it in the message
    pub fn new(field: &'static str, value: i32) -> Result<Self, WorkoutError> {
        if value < 0 {
            Err(WorkoutError::NegativeMetric { field, value })
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// One exercise line of a workout.
///
/// Either rep-based (`reps`) or timed (`duration_seconds`), never both.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

impl WorkoutEntry {
    const MAX_EXERCISE_NAME_LENGTH: usize = 255;

    /// Check the entry on its own.
    ///
    /// # Errors
    /// * `EmptyExerciseName`, `ExerciseNameTooLong`, `NonPositiveSets`,
    ///   `RepsOrDuration`, `NonPositiveReps`, `NonPositiveDuration`, `NegativeWeight`
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.exercise_name.trim().is_empty() {
            return Err(EntryError::EmptyExerciseName);
        }
        let name_length = self.exercise_name.chars().count();
        if name_length > Self::MAX_EXERCISE_NAME_LENGTH {
            return Err(EntryError::ExerciseNameTooLong {
                max: Self::MAX_EXERCISE_NAME_LENGTH,
                actual: name_length,
            });
        }
        if self.sets <= 0 {
            return Err(EntryError::NonPositiveSets(self.sets));
        }
        match (self.reps, self.duration_seconds) {
            (Some(reps), None) if reps <= 0 => return Err(EntryError::NonPositiveReps(reps)),
            (None, Some(seconds)) if seconds <= 0 => {
                return Err(EntryError::NonPositiveDuration(seconds))
            }
            (Some(_), None) | (None, Some(_)) => {}
            _ => return Err(EntryError::RepsOrDuration),
        }
        if let Some(weight) = self.weight {
            if weight.is_nan() || weight < 0.0 {
                return Err(EntryError::NegativeWeight(weight));
            }
        }
        Ok(())
    }
}

/// Validated entry list, sorted ascending by `order_index`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkoutEntries(Vec<WorkoutEntry>);

impl WorkoutEntries {
    /// Validate every entry, reject repeated order indexes, then sort.
    pub fn new(mut entries: Vec<WorkoutEntry>) -> Result<Self, EntryError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.order_index) {
                return Err(EntryError::DuplicateOrderIndex(entry.order_index));
            }
        }

        entries.sort_by_key(|entry| entry.order_index);
        Ok(Self(entries))
    }

    pub fn as_slice(&self) -> &[WorkoutEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutEntry> {
        self.0.iter()
    }
}

/// Command to create a workout; the owner comes from the request principal.
#[derive(Debug, Clone)]
pub struct CreateWorkoutCommand {
    pub title: WorkoutTitle,
    pub description: String,
    pub duration_minutes: Metric,
    pub calories_burned: Metric,
    pub entries: WorkoutEntries,
}

/// Header and entries of a workout that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub user_id: UserId,
    pub title: WorkoutTitle,
    pub description: String,
    pub duration_minutes: Metric,
    pub calories_burned: Metric,
    pub entries: WorkoutEntries,
}

/// Partial update. `entries`, when given, replaces the whole list.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkoutCommand {
    pub title: Option<WorkoutTitle>,
    pub description: Option<String>,
    pub duration_minutes: Option<Metric>,
    pub calories_burned: Option<Metric>,
    pub entries: Option<WorkoutEntries>,
}
