//! Global dispatch store.
//!
//! A [`Store`] owns the state of one reducer slice and only changes it by
//! running dispatched intents through that reducer.

pub mod auth;
pub mod example;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::mvi::Reducer;

/// Shared, dispatch-only container for a reducer's state.
///
/// Cloning is cheap; all clones observe the same state.
pub struct Store<R: Reducer> {
    state: Arc<Mutex<R::State>>,
}

impl<R: Reducer> Store<R> {
    /// Creates a store holding the reducer's default state.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Runs the intent through the reducer and stores the result.
    pub fn dispatch(&self, intent: R::Intent) {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        *guard = R::reduce(current, intent);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.lock().clone()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
