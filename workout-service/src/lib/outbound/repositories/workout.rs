use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::Transaction;

use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::Metric;
use crate::domain::workout::models::NewWorkout;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutEntries;
use crate::domain::workout::models::WorkoutEntry;
use crate::domain::workout::models::WorkoutId;
use crate::domain::workout::models::WorkoutTitle;
use crate::domain::workout::ports::WorkoutRepository;

const WORKOUT_COLUMNS: &str =
    "id, user_id, title, description, duration_minutes, calories_burned, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
struct WorkoutRecord {
    id: i64,
    user_id: i64,
    title: String,
    description: String,
    duration_minutes: i32,
    calories_burned: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct EntryRecord {
    exercise_name: String,
    sets: i32,
    reps: Option<i32>,
    duration_seconds: Option<i32>,
    weight: Option<f64>,
    notes: String,
    order_index: i32,
}

impl From<EntryRecord> for WorkoutEntry {
    fn from(r: EntryRecord) -> Self {
        Self {
            exercise_name: r.exercise_name,
            sets: r.sets,
            reps: r.reps,
            duration_seconds: r.duration_seconds,
            weight: r.weight,
            notes: r.notes,
            order_index: r.order_index,
        }
    }
}

// Stored rows passed validation on the way in; failing it now means corrupt data.
fn corrupt(id: i64, e: impl std::fmt::Display) -> WorkoutError {
    WorkoutError::DatabaseError(format!("stored workout {} is invalid: {}", id, e))
}

impl WorkoutRecord {
    fn into_workout(self, entries: WorkoutEntries) -> Result<Workout, WorkoutError> {
        let id = self.id;
        Ok(Workout {
            id: WorkoutId(id),
            user_id: UserId(self.user_id),
            title: WorkoutTitle::new(self.title).map_err(|e| corrupt(id, e))?,
            description: self.description,
            duration_minutes: Metric::new("duration_minutes", self.duration_minutes)
                .map_err(|e| corrupt(id, e))?,
            calories_burned: Metric::new("calories_burned", self.calories_burned)
                .map_err(|e| corrupt(id, e))?,
            entries,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> WorkoutError {
    WorkoutError::DatabaseError(e.to_string())
}

pub struct PostgresWorkoutRepository {
    pool: PgPool,
}

impl PostgresWorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_entries(&self, workout_id: i64) -> Result<WorkoutEntries, WorkoutError> {
        let rows = sqlx::query_as::<_, EntryRecord>(
            r#"
            SELECT exercise_name, sets, reps, duration_seconds, weight, notes, order_index
            FROM workout_entries
            WHERE workout_id = $1
            ORDER BY order_index
            "#,
        )
        .bind(workout_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        WorkoutEntries::new(rows.into_iter().map(WorkoutEntry::from).collect())
            .map_err(|e| corrupt(workout_id, e))
    }

    async fn with_entries(
        &self,
        records: Vec<WorkoutRecord>,
    ) -> Result<Vec<Workout>, WorkoutError> {
        let mut workouts = Vec::with_capacity(records.len());
        for record in records {
            let entries = self.load_entries(record.id).await?;
            workouts.push(record.into_workout(entries)?);
        }
        Ok(workouts)
    }
}

/// Insert entries in ascending order index inside an open transaction.
async fn insert_entries(
    tx: &mut Transaction<'_, Postgres>,
    workout_id: i64,
    entries: &WorkoutEntries,
) -> Result<(), WorkoutError> {
    for entry in entries.iter() {
        sqlx::query(
            r#"
            INSERT INTO workout_entries
                (workout_id, exercise_name, sets, reps, duration_seconds, weight, notes, order_index)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(workout_id)
        .bind(&entry.exercise_name)
        .bind(entry.sets)
        .bind(entry.reps)
        .bind(entry.duration_seconds)
        .bind(entry.weight)
        .bind(&entry.notes)
        .bind(entry.order_index)
        .execute(&mut **tx)
        .await
        .map_err(database_error)?;
    }
    Ok(())
}

#[async_trait]
impl WorkoutRepository for PostgresWorkoutRepository {
    async fn create(&self, workout: NewWorkout) -> Result<Workout, WorkoutError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let record = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            INSERT INTO workouts (user_id, title, description, duration_minutes, calories_burned)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(workout.user_id.0)
        .bind(workout.title.as_str())
        .bind(&workout.description)
        .bind(workout.duration_minutes.value())
        .bind(workout.calories_burned.value())
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error)?;

        insert_entries(&mut tx, record.id, &workout.entries).await?;

        tx.commit().await.map_err(database_error)?;

        record.into_workout(workout.entries)
    }

    async fn find_by_id(&self, id: &WorkoutId) -> Result<Option<Workout>, WorkoutError> {
        let record = sqlx::query_as::<_, WorkoutRecord>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match record {
            Some(record) => {
                let entries = self.load_entries(record.id).await?;
                Ok(Some(record.into_workout(entries)?))
            }
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Workout>, WorkoutError> {
        let records = sqlx::query_as::<_, WorkoutRecord>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        self.with_entries(records).await
    }

    async fn list_by_owner(&self, user_id: &UserId) -> Result<Vec<Workout>, WorkoutError> {
        let records = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workouts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        self.with_entries(records).await
    }

    async fn update(&self, workout: Workout) -> Result<Workout, WorkoutError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        // Dropping `tx` without commit rolls everything back.
        let record = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            UPDATE workouts
            SET title = $2, description = $3, duration_minutes = $4, calories_burned = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(workout.id.0)
        .bind(workout.title.as_str())
        .bind(&workout.description)
        .bind(workout.duration_minutes.value())
        .bind(workout.calories_burned.value())
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error)?
        .ok_or(WorkoutError::NotFound(workout.id))?;

        sqlx::query("DELETE FROM workout_entries WHERE workout_id = $1")
            .bind(record.id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        insert_entries(&mut tx, record.id, &workout.entries).await?;

        tx.commit().await.map_err(database_error)?;

        record.into_workout(workout.entries)
    }

    async fn delete(&self, id: &WorkoutId) -> Result<(), WorkoutError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(WorkoutError::NotFound(*id));
        }

        Ok(())
    }

    async fn find_owner(&self, id: &WorkoutId) -> Result<Option<UserId>, WorkoutError> {
        sqlx::query_scalar::<_, i64>("SELECT user_id FROM workouts WHERE id = $1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map(|owner| owner.map(UserId))
            .map_err(database_error)
    }
}
