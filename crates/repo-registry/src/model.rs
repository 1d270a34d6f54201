//! Record and payload models for serialization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A repository record held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Server-assigned identifier, immutable after creation.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Repository URL. Not validated beyond being non-empty.
    pub url: String,
    /// Technology names in the order the client supplied them.
    pub techs: Vec<String>,
    /// Number of likes received.
    pub likes: u64,
}

impl Repository {
    /// Build a fresh record with a random v4 id and zero likes.
    pub fn new(new: NewRepository) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            url: new.url,
            techs: new.techs,
            likes: 0,
        }
    }

    /// Overwrite the fields the update supplies with a non-empty value.
    ///
    /// Absent fields and empty strings or lists leave the current value in
    /// place. `id` and `likes` are never touched.
    pub fn apply(&mut self, update: UpdateRepository) {
        if let Some(title) = update.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(url) = update.url.filter(|u| !u.is_empty()) {
            self.url = url;
        }
        if let Some(techs) = update.techs.filter(|t| !t.is_empty()) {
            self.techs = techs;
        }
    }
}

/// Raw creation body as sent by a client. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateRepository {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
}

/// A creation payload that passed validation.
///
/// Only [`crate::validate_creation`] produces this type, so holding one means
/// every field is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepository {
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) techs: Vec<String>,
}

impl NewRepository {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn techs(&self) -> &[String] {
        &self.techs
    }
}

/// Partial update body. Unknown fields such as `id` or `likes` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateRepository {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
}
