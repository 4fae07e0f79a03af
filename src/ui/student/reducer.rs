//! Reducer for the student form.

use crate::ui::mvi::Reducer;

use super::intent::StudentFormIntent;
use super::state::{StudentFields, StudentFormState};

/// Pure state transitions for the form. Network calls, toasts and
/// navigation are handled by the controller around each dispatch.
pub struct StudentFormReducer;

impl Reducer for StudentFormReducer {
    type State = StudentFormState;
    type Intent = StudentFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StudentFormIntent::Edit { field, value } => {
                state.fields.set(field, value);
                state
            }
            StudentFormIntent::BusyStarted => StudentFormState {
                is_loading: true,
                ..state
            },
            StudentFormIntent::BusyFinished => StudentFormState {
                is_loading: false,
                ..state
            },
            StudentFormIntent::Loaded { record } => StudentFormState {
                fields: StudentFields::from_record(&record),
                photo: record.photo_url().unwrap_or_default().to_string(),
                ..state
            },
        }
    }
}
