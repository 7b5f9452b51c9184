use std::sync::Mutex;

use solid_common::error::StorageError;
use solid_common::models::User;
use tracing::debug;

use crate::ports::UserRepository;

/// Keeps users in a vector. Emails are unique.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything saved so far, in insertion order.
    pub fn users(&self) -> Vec<User> {
        match self.users.lock() {
            Ok(users) => users.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.users().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), StorageError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| StorageError::Unavailable("user store lock poisoned".into()))?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(StorageError::Duplicate(user.email.clone()));
        }

        debug!(user = %user, "saving user");
        users.push(user.clone());
        Ok(())
    }
}
