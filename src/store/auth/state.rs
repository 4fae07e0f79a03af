use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub token: Option<String>,
}

impl UiState for AuthState {}
