//! Serializable message types for the HTTP layer.
//!
//! Domain models carry no serde derives; these types own the JSON shape of
//! requests and responses.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutEntry;

/// Public view of a user. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponseData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            bio: user.bio.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Entry as sent and received over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntryMessage {
    pub exercise_name: String,
    pub sets: i32,
    #[serde(default)]
    pub reps: Option<i32>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: String,
    pub order_index: i32,
}

impl From<&WorkoutEntry> for WorkoutEntryMessage {
    fn from(entry: &WorkoutEntry) -> Self {
        Self {
            exercise_name: entry.exercise_name.clone(),
            sets: entry.sets,
            reps: entry.reps,
            duration_seconds: entry.duration_seconds,
            weight: entry.weight,
            notes: entry.notes.clone(),
            order_index: entry.order_index,
        }
    }
}

impl From<WorkoutEntryMessage> for WorkoutEntry {
    fn from(msg: WorkoutEntryMessage) -> Self {
        Self {
            exercise_name: msg.exercise_name,
            sets: msg.sets,
            reps: msg.reps,
            duration_seconds: msg.duration_seconds,
            weight: msg.weight,
            notes: msg.notes,
            order_index: msg.order_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutResponseData {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<WorkoutEntryMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Workout> for WorkoutResponseData {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id.0,
            user_id: workout.user_id.0,
            title: workout.title.as_str().to_string(),
            description: workout.description.clone(),
            duration_minutes: workout.duration_minutes.value(),
            calories_burned: workout.calories_burned.value(),
            entries: workout.entries.iter().map(WorkoutEntryMessage::from).collect(),
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponseData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutEnvelope {
    pub workout: WorkoutResponseData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutsEnvelope {
    pub workouts: Vec<WorkoutResponseData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEnvelope {
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
