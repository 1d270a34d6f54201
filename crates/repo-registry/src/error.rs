//! Error type for registry operations.

use thiserror::Error;

/// Errors that registry operations and validators can produce.
///
/// The display strings are part of the public contract: the HTTP layer sends
/// them verbatim as the `error` field of a `400` response body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// A creation payload is missing `title`, `url`, or `techs`, or one of
    /// them is empty or of the wrong type.
    #[error("Invalid params")]
    InvalidParams,
    /// The identifier is not a canonical UUID or no record carries it.
    #[error("Repository not found.")]
    RepositoryNotFound,
}
