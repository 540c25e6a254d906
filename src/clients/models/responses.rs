use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::models::common::{ExerciseType, MuscleGroup, RepRange, SetType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub routine_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub exercises: Vec<WorkoutExercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub index: u32,
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub exercise_template_id: String,
    // responses spell it `supersets_id`
    #[serde(default, alias = "supersets_id")]
    pub superset_id: Option<u32>,
    pub sets: Vec<WorkoutSet>,
}

/// A logged set. Weight/reps and distance/duration are all optional; which
/// ones are filled depends on the exercise type and is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub index: u32,
    #[serde(rename = "type")]
    pub set_type: SetType,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub distance_meters: Option<u32>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub rpe: Option<f64>,
    #[serde(default)]
    pub custom_metric: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub folder_id: Option<u64>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub exercises: Vec<RoutineExercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineExercise {
    pub index: u32,
    pub title: String,
    #[serde(default)]
    pub rest_seconds: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    pub exercise_template_id: String,
    #[serde(default, alias = "supersets_id")]
    pub superset_id: Option<u32>,
    pub sets: Vec<RoutineSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineSet {
    pub index: u32,
    #[serde(rename = "type")]
    pub set_type: SetType,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub rep_range: Option<RepRange>,
    #[serde(default)]
    pub distance_meters: Option<u32>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub rpe: Option<f64>,
    #[serde(default)]
    pub custom_metric: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineFolder {
    pub id: u64,
    pub index: u32,
    pub title: String,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    #[serde(default)]
    pub primary_muscle_group: Option<MuscleGroup>,
    #[serde(default)]
    pub secondary_muscle_groups: Vec<MuscleGroup>,
    pub is_custom: bool,
}

/// Returned by custom exercise creation; the API sends back only the new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedExerciseTemplate {
    pub id: u64,
}

/// One completed set of an exercise template, with the workout it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryEntry {
    pub workout_id: String,
    pub workout_title: String,
    pub workout_start_time: DateTime<Utc>,
    pub workout_end_time: DateTime<Utc>,
    pub exercise_template_id: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub distance_meters: Option<u32>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub rpe: Option<f64>,
    #[serde(default)]
    pub custom_metric: Option<f64>,
    pub set_type: SetType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutEvent {
    Updated {
        workout: Workout,
    },
    Deleted {
        id: String,
        deleted_at: DateTime<Utc>,
    },
}

impl WorkoutEvent {
    /// Id of the workout the event refers to.
    pub fn workout_id(&self) -> &str {
        match self {
            WorkoutEvent::Updated { workout } => &workout.id,
            WorkoutEvent::Deleted { id, .. } => id,
        }
    }
}

// Workouts list response from GET /v1/workouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutsPage {
    pub page: u32,
    pub page_count: u32,
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEventsPage {
    pub page: u32,
    pub page_count: u32,
    pub events: Vec<WorkoutEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutinesPage {
    pub page: u32,
    pub page_count: u32,
    pub routines: Vec<Routine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineFoldersPage {
    pub page: u32,
    pub page_count: u32,
    pub routine_folders: Vec<RoutineFolder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTemplatesPage {
    pub page: u32,
    pub page_count: u32,
    pub exercise_templates: Vec<ExerciseTemplate>,
}

// Create/update envelope returned by POST/PUT /v1/workouts (array)
#[derive(Debug, Deserialize)]
pub(crate) struct WorkoutWriteApiResponse {
    pub workout: Vec<Workout>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkoutCountApiResponse {
    pub workout_count: u64,
}

// Single routine envelope used by GET /v1/routines/{id}
#[derive(Debug, Deserialize)]
pub(crate) struct RoutineApiResponse {
    pub routine: Routine,
}

// Create/update envelope returned by POST/PUT /v1/routines (array)
#[derive(Debug, Deserialize)]
pub(crate) struct RoutineWriteApiResponse {
    pub routine: Vec<Routine>,
}

// Create envelope returned by POST /v1/routine_folders (bare object)
#[derive(Debug, Deserialize)]
pub(crate) struct RoutineFolderApiResponse {
    pub routine_folder: RoutineFolder,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExerciseHistoryApiResponse {
    pub exercise_history: Vec<ExerciseHistoryEntry>,
}
