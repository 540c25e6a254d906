//! One module per resource group.
//!
//! Each module exposes pure `*_request` builders and `parse_*` functions, plus
//! a handle for each client (`Workouts` / `BlockingWorkouts`, ...) that only
//! pipes one into the other. Envelope extraction is spelled out per endpoint
//! because the API wraps the same resource differently depending on the call.

pub mod exercise_history;
pub mod exercise_templates;
pub mod routine_folders;
pub mod routines;
pub mod workouts;

use crate::error::{HevyError, Result};

/// Unwraps the single-element arrays returned by some create/update calls.
pub(crate) fn first_element<T>(context: &'static str, items: Vec<T>) -> Result<T> {
    items
        .into_iter()
        .next()
        .ok_or_else(|| HevyError::unexpected(context, "API returned an empty array"))
}
