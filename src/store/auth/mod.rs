//! Authentication slice.
//!
//! Only the session flag and token live here; login itself happens
//! elsewhere. The form controller sees this slice through [`AuthDispatch`].

mod intent;
mod reducer;
mod state;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use state::AuthState;

use super::Store;

/// The one capability the form controller needs from the global store.
pub trait AuthDispatch: Send + Sync {
    /// Signals that the server rejected the current credentials.
    fn login_failure(&self);
}

impl AuthDispatch for Store<AuthReducer> {
    fn login_failure(&self) {
        self.dispatch(AuthIntent::LoginFailure);
    }
}

impl Store<AuthReducer> {
    /// Token of the current session, if logged in.
    pub fn token(&self) -> Option<String> {
        self.state().token
    }
}
