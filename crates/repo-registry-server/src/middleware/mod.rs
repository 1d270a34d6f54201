//! Request middleware: the logging hook and the validation gates.

pub mod logging;
pub mod validate;

pub use logging::log_request;
pub use validate::{require_existing_repository, ValidatedRepository};
