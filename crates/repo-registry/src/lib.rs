//! Core types for the repository registry.
//!
//! This crate provides everything the HTTP service needs that is independent
//! of the transport:
//! - [`Repository`] and the request payloads that create or modify it
//! - [`Registry`], the ordered in-memory store of records
//! - the creation-payload and identifier-existence validators
//! - [`RegistryError`], the error taxonomy shared by every operation

mod error;
mod model;
mod registry;
mod validate;

pub use error::RegistryError;
pub use model::{CreateRepository, NewRepository, Repository, UpdateRepository};
pub use registry::Registry;
pub use validate::{parse_repository_id, validate_creation, validate_existing_id};
