pub mod history;
pub mod mvi;
pub mod student;
pub mod toast;
