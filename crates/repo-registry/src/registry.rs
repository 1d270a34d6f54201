//! Ordered in-memory store of repository records.

use uuid::Uuid;

use crate::error::RegistryError;
use crate::model::{NewRepository, Repository, UpdateRepository};

/// The registry: records in insertion order, looked up by linear scan.
///
/// This type is not synchronized. The server shares it behind a single
/// mutex so every operation runs under mutual exclusion.
#[derive(Debug, Default)]
pub struct Registry {
    repositories: Vec<Repository>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in the order they were created.
    pub fn list(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Get a record by id.
    ///
    /// Returns `None` if no record carries the id.
    pub fn get(&self, id: &Uuid) -> Option<&Repository> {
        self.repositories.iter().find(|r| r.id == *id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.position(id).is_some()
    }

    /// Append a new record and return a copy of it.
    pub fn create(&mut self, new: NewRepository) -> Repository {
        let repository = Repository::new(new);
        tracing::debug!(id = %repository.id, "Appending repository");
        self.repositories.push(repository.clone());
        repository
    }

    /// Apply a partial update to the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::RepositoryNotFound`] if no record matches.
    pub fn update(
        &mut self,
        id: &Uuid,
        update: UpdateRepository,
    ) -> Result<Repository, RegistryError> {
        let repository = self.find_mut(id)?;
        repository.apply(update);
        Ok(repository.clone())
    }

    /// Remove the record with the given id and return it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::RepositoryNotFound`] if no record matches.
    pub fn delete(&mut self, id: &Uuid) -> Result<Repository, RegistryError> {
        let index = self
            .position(id)
            .ok_or(RegistryError::RepositoryNotFound)?;
        Ok(self.repositories.remove(index))
    }

    /// Add one like to the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::RepositoryNotFound`] if no record matches.
    pub fn like(&mut self, id: &Uuid) -> Result<Repository, RegistryError> {
        let repository = self.find_mut(id)?;
        repository.likes = repository.likes.saturating_add(1);
        Ok(repository.clone())
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.repositories.iter().position(|r| r.id == *id)
    }

    fn find_mut(&mut self, id: &Uuid) -> Result<&mut Repository, RegistryError> {
        self.repositories
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(RegistryError::RepositoryNotFound)
    }
}
