use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExampleState {
    pub clicked: bool,
}

impl UiState for ExampleState {}
