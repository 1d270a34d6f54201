//! Request validators.
//!
//! Both validators run before any mutation, so a rejected request never
//! leaves the registry partially modified.

use uuid::Uuid;

use crate::error::RegistryError;
use crate::model::{CreateRepository, NewRepository};
use crate::registry::Registry;

/// Length of the canonical `8-4-4-4-12` textual form.
const HYPHENATED_LEN: usize = 36;

/// Check a creation payload.
///
/// `title` and `url` must be non-empty strings and `techs` a non-empty list.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidParams`] if any of the three is missing
/// or empty.
pub fn validate_creation(payload: CreateRepository) -> Result<NewRepository, RegistryError> {
    match payload {
        CreateRepository {
            title: Some(title),
            url: Some(url),
            techs: Some(techs),
        } if !title.is_empty() && !url.is_empty() && !techs.is_empty() => Ok(NewRepository {
            title,
            url,
            techs,
        }),
        _ => Err(RegistryError::InvalidParams),
    }
}

/// Parse an identifier shaped like a hyphenated UUID, in either letter case.
///
/// Returns `None` for anything else, including the simple, braced and URN
/// forms the `uuid` crate would otherwise accept.
pub fn parse_repository_id(raw: &str) -> Option<Uuid> {
    if raw.len() != HYPHENATED_LEN {
        return None;
    }
    Uuid::try_parse(raw).ok()
}

/// Check that `raw` is a UUID and that a record with exactly that id exists.
///
/// Ids are compared in their serialized lower-case form, so an upper-case
/// spelling of an existing id is UUID-shaped but names no record.
///
/// # Errors
///
/// Returns [`RegistryError::RepositoryNotFound`] when either check fails.
/// The two cases are indistinguishable to the caller.
pub fn validate_existing_id(registry: &Registry, raw: &str) -> Result<Uuid, RegistryError> {
    let id = parse_repository_id(raw).ok_or(RegistryError::RepositoryNotFound)?;
    if id.hyphenated().to_string() == raw && registry.contains(&id) {
        Ok(id)
    } else {
        Err(RegistryError::RepositoryNotFound)
    }
}
