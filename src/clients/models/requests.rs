//! Request bodies. Every `None` is left out of the JSON entirely: the API
//! treats an omitted key differently from an explicit `null`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clients::models::common::{
    EquipmentCategory, ExerciseType, MuscleGroup, RepRange, SetType,
};
use crate::clients::models::responses::{RoutineExercise, RoutineSet, WorkoutExercise, WorkoutSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<String>,
    pub is_private: bool,
    pub exercises: Vec<WorkoutExerciseInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutExerciseInput {
    pub exercise_template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superset_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub sets: Vec<WorkoutSetInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSetInput {
    #[serde(rename = "type")]
    pub set_type: SetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
}

impl WorkoutSetInput {
    pub fn new(set_type: SetType) -> Self {
        Self {
            set_type,
            weight_kg: None,
            reps: None,
            distance_meters: None,
            duration_seconds: None,
            custom_metric: None,
            rpe: None,
        }
    }

    pub fn weight_reps(set_type: SetType, weight_kg: f64, reps: u32) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            reps: Some(reps),
            ..Self::new(set_type)
        }
    }
}

/// Body of POST and PUT /v1/workouts.
#[derive(Debug, Serialize)]
pub struct WorkoutRequest<'a> {
    pub workout: &'a WorkoutInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutineCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub exercises: Vec<RoutineExerciseInput>,
}

/// Partial routine update; unset fields keep their server-side value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<RoutineExerciseInput>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutineExerciseInput {
    pub exercise_template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superset_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub sets: Vec<RoutineSetInput>,
}

// rpe is not accepted on routine sets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutineSetInput {
    #[serde(rename = "type")]
    pub set_type: SetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_range: Option<RepRange>,
}

impl RoutineSetInput {
    pub fn new(set_type: SetType) -> Self {
        Self {
            set_type,
            weight_kg: None,
            reps: None,
            distance_meters: None,
            duration_seconds: None,
            custom_metric: None,
            rep_range: None,
        }
    }

    pub fn weight_reps(set_type: SetType, weight_kg: f64, reps: u32) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            reps: Some(reps),
            ..Self::new(set_type)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateRoutineRequest<'a> {
    pub routine: &'a RoutineCreate,
}

#[derive(Debug, Serialize)]
pub struct UpdateRoutineRequest<'a> {
    pub routine: &'a RoutineUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineFolderCreate {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct CreateRoutineFolderRequest<'a> {
    pub routine_folder: &'a RoutineFolderCreate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomExercise {
    pub title: String,
    pub exercise_type: ExerciseType,
    pub equipment_category: EquipmentCategory,
    pub muscle_group: MuscleGroup,
    pub other_muscles: Vec<MuscleGroup>,
}

#[derive(Debug, Serialize)]
pub struct CreateCustomExerciseRequest<'a> {
    pub exercise: &'a CustomExercise,
}

impl WorkoutExercise {
    pub fn to_input(&self) -> WorkoutExerciseInput {
        WorkoutExerciseInput {
            exercise_template_id: self.exercise_template_id.clone(),
            superset_id: self.superset_id,
            notes: self.notes.clone(),
            sets: self.sets.iter().map(WorkoutSet::to_input).collect(),
        }
    }
}

impl WorkoutSet {
    pub fn to_input(&self) -> WorkoutSetInput {
        WorkoutSetInput {
            set_type: self.set_type,
            weight_kg: self.weight_kg,
            reps: self.reps,
            distance_meters: self.distance_meters,
            duration_seconds: self.duration_seconds,
            custom_metric: self.custom_metric,
            rpe: self.rpe,
        }
    }
}

impl RoutineExercise {
    pub fn to_update_format(&self) -> RoutineExerciseInput {
        RoutineExerciseInput {
            exercise_template_id: self.exercise_template_id.clone(),
            superset_id: self.superset_id,
            rest_seconds: self.rest_seconds,
            notes: self.notes.clone(),
            sets: self.sets.iter().map(RoutineSet::to_update_format).collect(),
        }
    }
}

impl RoutineSet {
    /// Drops `rpe`, which routine writes reject.
    pub fn to_update_format(&self) -> RoutineSetInput {
        RoutineSetInput {
            set_type: self.set_type,
            weight_kg: self.weight_kg,
            reps: self.reps,
            distance_meters: self.distance_meters,
            duration_seconds: self.duration_seconds,
            custom_metric: self.custom_metric,
            rep_range: self.rep_range,
        }
    }
}
