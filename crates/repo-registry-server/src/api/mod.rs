//! API handlers for the registry server.

pub mod repositories;
