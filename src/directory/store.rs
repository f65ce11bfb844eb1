//! # User Store
//!
//! In-memory record store holding all user records in insertion order.
//! Every operation runs under a single lock acquisition, so check-then-mutate
//! sequences (duplicate email check + append) are atomic with respect to
//! concurrent requests.

use std::sync::RwLock;

use uuid::Uuid;

use super::errors::{DirectoryError, DirectoryResult};
use super::user::User;

/// In-memory user store
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all records in insertion order
    pub fn list(&self) -> DirectoryResult<Vec<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| DirectoryError::LockPoisoned)?;
        Ok(users.clone())
    }

    /// Append a record after checking email uniqueness.
    ///
    /// `submitted_email` is compared verbatim (case-sensitive, untrimmed)
    /// against the stored emails; the check and the append happen under the
    /// same write lock.
    pub fn insert(&self, user: User, submitted_email: &str) -> DirectoryResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DirectoryError::LockPoisoned)?;

        if users.iter().any(|u| u.email == submitted_email) {
            return Err(DirectoryError::EmailAlreadyExists);
        }

        users.push(user.clone());
        Ok(user)
    }

    /// Find a record by its identifier
    pub fn find_by_id(&self, id: Uuid) -> DirectoryResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| DirectoryError::LockPoisoned)?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    /// Remove the first record matching `id`, returning it if present
    pub fn remove_by_id(&self, id: Uuid) -> DirectoryResult<Option<User>> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DirectoryError::LockPoisoned)?;

        match users.iter().position(|u| u.id == id) {
            Some(index) => Ok(Some(users.remove(index))),
            None => Ok(None),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.users.read().map(|u| u.len()).unwrap_or(0)
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
