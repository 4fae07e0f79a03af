//! REST collaborator for the `/alunos` resource.
//!
//! [`StudentService`] is the seam the form controller talks through;
//! [`HttpStudentService`] is the reqwest-backed implementation.

mod client;
mod error;
mod types;

pub use client::{HttpStudentService, StudentService};
pub use error::ApiError;
pub use types::{Photo, StudentId, StudentPayload, StudentRecord};
