//! Navigation collaborator.

use parking_lot::Mutex;

/// Home view, where a failed load sends the user.
pub const HOME_PATH: &str = "/";

/// Moves the application to another view.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Path of the edit view for a student.
pub fn student_edit_path(id: impl std::fmt::Display) -> String {
    format!("/aluno/{}/edit", id)
}

/// Path of the photo editor for a student.
pub fn photo_edit_path(id: impl std::fmt::Display) -> String {
    format!("/fotos/{}", id)
}

/// Extracts the id from an `/aluno/{id}/edit` path.
///
/// Returns `None` for `/aluno`, `/aluno/` and anything else.
pub fn student_id_from_path(path: &str) -> Option<&str> {
    let mut segments = path.trim_matches('/').split('/');
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some("aluno"), Some(id), Some("edit"), None) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// In-memory navigation history.
///
/// Records every pushed path; the last one is the current location.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<String>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current location, or `/` before any navigation.
    pub fn location(&self) -> String {
        self.entries
            .lock()
            .last()
            .cloned()
            .unwrap_or_else(|| HOME_PATH.to_string())
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

impl Navigator for History {
    fn navigate_to(&self, path: &str) {
        tracing::debug!(path, "navigate");
        self.entries.lock().push(path.to_string());
    }
}
