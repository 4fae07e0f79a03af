//! State snapshots owned by a store or by the form controller.

/// A value the reducers replace wholesale.
///
/// `Default` is the initial state (empty form, `clicked = false`, logged
/// out) and also what `Store::dispatch` leaves behind while the reducer
/// runs. `Clone` lets callers read a snapshot without holding the lock.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
