use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthIntent {
    LoginSuccess { token: String },
    /// Credentials were rejected (HTTP 401). Drops the session.
    LoginFailure,
}

impl Intent for AuthIntent {}
