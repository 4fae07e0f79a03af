use crate::ui::mvi::Reducer;

use super::intent::AuthIntent;
use super::state::AuthState;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::LoginSuccess { token } => AuthState {
                is_logged_in: true,
                token: Some(token),
            },
            AuthIntent::LoginFailure => {
                tracing::info!("session dropped after login failure");
                AuthState::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_success_stores_token() {
        let state = AuthReducer::reduce(
            AuthState::default(),
            AuthIntent::LoginSuccess {
                token: "t".to_string(),
            },
        );
        assert!(state.is_logged_in);
        assert_eq!(state.token.as_deref(), Some("t"));
    }

    #[test]
    fn login_failure_resets_state() {
        let state = AuthState {
            is_logged_in: true,
            token: Some("t".to_string()),
        };
        assert_eq!(
            AuthReducer::reduce(state, AuthIntent::LoginFailure),
            AuthState::default()
        );
    }
}
