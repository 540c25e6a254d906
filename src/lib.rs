//! Typed client for the Hevy fitness-tracking API.
//!
//! [`HevyClient`] (async) and [`BlockingHevyClient`] expose the same resource
//! groups (workouts, routines, routine folders, exercise templates and
//! exercise history) and share request building, validation and response
//! parsing; only the I/O differs.
//!
//! ```no_run
//! # async fn run() -> hevy_api_client::Result<()> {
//! use hevy_api_client::{Config, HevyClient};
//!
//! let client = HevyClient::new(&Config::new("my-api-key"))?;
//! let page = client.workouts().get_workouts(1, 10).await?;
//! for workout in &page.workouts {
//!     println!("{} ({} exercises)", workout.title, workout.exercises.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod error;

pub use clients::blocking::BlockingHevyClient;
pub use clients::hevy::HevyClient;
pub use clients::http::MAX_PAGE_SIZE;
pub use clients::models::common::{EquipmentCategory, ExerciseType, MuscleGroup, RepRange, SetType};
pub use clients::models::requests::{
    CustomExercise, RoutineCreate, RoutineExerciseInput, RoutineFolderCreate, RoutineSetInput,
    RoutineUpdate, WorkoutExerciseInput, WorkoutInput, WorkoutSetInput,
};
pub use clients::models::responses::{
    CreatedExerciseTemplate, ExerciseHistoryEntry, ExerciseTemplate, ExerciseTemplatesPage,
    Routine, RoutineExercise, RoutineFolder, RoutineFoldersPage, RoutineSet, RoutinesPage,
    Workout, WorkoutEvent, WorkoutEventsPage, WorkoutExercise, WorkoutSet, WorkoutsPage,
};
pub use config::Config;
pub use error::{HevyError, Result};
