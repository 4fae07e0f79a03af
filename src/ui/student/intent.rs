//! Intents for the student form.

use crate::api::StudentRecord;
use crate::ui::mvi::Intent;

use super::state::Field;

#[derive(Debug, Clone)]
pub enum StudentFormIntent {
    /// User typed into an input.
    Edit { field: Field, value: String },

    /// A fetch or submit started.
    BusyStarted,

    /// A fetch or submit finished, successfully or not.
    BusyFinished,

    /// Record fetched; replaces every field and the photo.
    Loaded { record: StudentRecord },
}

impl Intent for StudentFormIntent {}
