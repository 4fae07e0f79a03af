//! Actions for the example slice.

use crate::ui::mvi::Intent;

pub const BUTTON_CLICKED_REQUEST: &str = "BOTAO_CLICADO_REQUEST";
pub const BUTTON_CLICKED_SUCCESS: &str = "BOTAO_CLICADO_SUCCESS";
pub const BUTTON_CLICKED_FAILURE: &str = "BOTAO_CLICADO_FAILURE";

/// Actions that can be dispatched to the example reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleAction {
    /// Button click request was issued.
    Request,

    /// Request completed successfully.
    Success,

    /// Request failed.
    Failure,

    /// Any action type this slice does not handle.
    Other(String),
}

impl ExampleAction {
    /// Maps an action type string onto an action.
    pub fn from_type(action_type: &str) -> Self {
        match action_type {
            BUTTON_CLICKED_REQUEST => Self::Request,
            BUTTON_CLICKED_SUCCESS => Self::Success,
            BUTTON_CLICKED_FAILURE => Self::Failure,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn action_type(&self) -> &str {
        match self {
            Self::Request => BUTTON_CLICKED_REQUEST,
            Self::Success => BUTTON_CLICKED_SUCCESS,
            Self::Failure => BUTTON_CLICKED_FAILURE,
            Self::Other(action_type) => action_type,
        }
    }
}

impl Intent for ExampleAction {}
