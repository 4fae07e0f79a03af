//! Route id change detection.

use crate::api::StudentId;

/// Decides when the route id warrants a fetch.
///
/// A fetch is due only when the observed id differs from the previous one
/// and no fetch for that same id is already running.
#[derive(Debug, Default)]
pub struct IdWatch {
    current: Option<StudentId>,
    in_flight: Option<StudentId>,
}

impl IdWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest id. Returns the id to fetch, if any; the caller
    /// must call [`IdWatch::finish`] once that fetch completes.
    pub fn observe(&mut self, id: Option<StudentId>) -> Option<StudentId> {
        if id == self.current {
            return None;
        }
        self.current = id.clone();

        let id = id?;
        if self.in_flight.as_ref() == Some(&id) {
            return None;
        }
        self.in_flight = Some(id.clone());
        Some(id)
    }

    /// Marks the fetch for `id` as done.
    pub fn finish(&mut self, id: &StudentId) {
        if self.in_flight.as_ref() == Some(id) {
            self.in_flight = None;
        }
    }

    pub fn current(&self) -> Option<&StudentId> {
        self.current.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }
}
