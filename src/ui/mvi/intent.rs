//! Intents: the only input a state machine accepts.

/// Something that happened and may change state.
///
/// In this crate that is a field edit or a finished fetch on the student
/// form, an action type on the example store, or a login result on the auth
/// slice. Intents carry data only; they never perform I/O themselves.
pub trait Intent: Send + 'static {}
