//! Notification collaborator.

use std::fmt;

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastKind::Success => f.write_str("success"),
            ToastKind::Error => f.write_str("error"),
        }
    }
}

/// A single user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Shows notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

/// Notifier that keeps every toast until drained.
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    /// Removes and returns all recorded toasts.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock())
    }

    /// Messages of the recorded toasts of one kind, in order.
    pub fn messages(&self, kind: ToastKind) -> Vec<String> {
        self.toasts
            .lock()
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.message.clone())
            .collect()
    }
}

impl Notifier for ToastLog {
    fn notify(&self, kind: ToastKind, message: &str) {
        match kind {
            ToastKind::Success => tracing::info!(text = message, "toast"),
            ToastKind::Error => tracing::warn!(text = message, "toast"),
        }
        self.toasts.lock().push(Toast {
            kind,
            message: message.to_string(),
        });
    }
}
