//! Student record form.
//!
//! Create and edit a single student against the `/alunos` API.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Editable fields, photo and busy flag
//! - `intent.rs` - Edits and API lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `validation.rs` - Pre-submit field rules
//! - `watch.rs` - Route id change detection
//! - `controller.rs` - Side effects: fetch, submit, toasts, navigation

mod controller;
mod intent;
mod reducer;
mod state;
mod validation;
mod watch;

pub use controller::{
    FormContext, LoadOutcome, StudentForm, SubmitOutcome, CREATED_MESSAGE, GENERIC_SAVE_ERROR,
    UPDATED_MESSAGE,
};
pub use intent::StudentFormIntent;
pub use reducer::StudentFormReducer;
pub use state::{Field, StudentFields, StudentFormState};
pub use validation::{
    is_email, is_float, is_int, validate, Violation, ViolationCategory, NAME_MAX_CHARS,
    NAME_MIN_CHARS,
};
pub use watch::IdWatch;
