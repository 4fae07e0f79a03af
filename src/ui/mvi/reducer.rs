//! The transition function shared by the form and the stores.

use super::intent::Intent;
use super::state::UiState;

/// Maps `(State, Intent)` to the next `State`.
///
/// `Store::dispatch` and the form controller both hand the current state
/// over by value and keep whatever comes back.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Total over `Self::Intent`: an intent the state does not care about
    /// returns the state unchanged. Only `tracing` diagnostics may happen
    /// here; HTTP calls, toasts and navigation stay with the caller.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
