//! Example action slice.
//!
//! Demonstrates the request/success/failure action pattern: a single
//! `clicked` flag that flips on every success.

mod intent;
mod reducer;
mod state;

pub use intent::{
    ExampleAction, BUTTON_CLICKED_FAILURE, BUTTON_CLICKED_REQUEST, BUTTON_CLICKED_SUCCESS,
};
pub use reducer::ExampleReducer;
pub use state::ExampleState;
