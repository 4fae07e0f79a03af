//! Student record form and example dispatch store.
//!
//! The form controller lives in [`ui::student`], the REST collaborator in
//! [`api`], and reducer-owned global state in [`store`].

pub mod api;
pub mod config;
pub mod store;
pub mod ui;
