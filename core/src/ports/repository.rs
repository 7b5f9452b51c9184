use solid_common::error::StorageError;
use solid_common::models::User;

/// Defines the contract for persisting users.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores `user`.
    ///
    /// # Errors
    /// * [`StorageError`] if the backend refuses or cannot be reached.
    async fn save(&self, user: &User) -> Result<(), StorageError>;
}

#[async_trait::async_trait]
impl<T: UserRepository + ?Sized> UserRepository for std::sync::Arc<T> {
    async fn save(&self, user: &User) -> Result<(), StorageError> {
        (**self).save(user).await
    }
}
