use crate::ui::mvi::Reducer;

use super::intent::ExampleAction;
use super::state::ExampleState;

/// Reducer for the example slice. Only `Success` changes state.
pub struct ExampleReducer;

impl Reducer for ExampleReducer {
    type State = ExampleState;
    type Intent = ExampleAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ExampleAction::Success => {
                tracing::debug!("button click succeeded");
                ExampleState {
                    clicked: !state.clicked,
                }
            }
            ExampleAction::Failure => {
                tracing::debug!("button click failed");
                state
            }
            ExampleAction::Request => {
                tracing::debug!("button click requested");
                state
            }
            ExampleAction::Other(_) => state,
        }
    }
}
