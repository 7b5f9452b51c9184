//! User onboarding.
//!
//! [`OnboardingService`] only sequences the steps. Checking the address,
//! storing the user and telling them about it are each owned by a separate
//! collaborator from [`crate::ports`].

use solid_common::error::OnboardingError;
use solid_common::models::User;
use tracing::debug;

use crate::ports::{Notifier, UserRepository, Validator};

pub struct OnboardingService {
    validator: Box<dyn Validator>,
    repository: Box<dyn UserRepository>,
    notifier: Box<dyn Notifier>,
}

impl OnboardingService {
    pub fn new(
        validator: Box<dyn Validator>,
        repository: Box<dyn UserRepository>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            validator,
            repository,
            notifier,
        }
    }

    /// Validates, saves, then sends the welcome message.
    ///
    /// A rejected email stops before anything is saved. A storage failure
    /// stops before anything is sent.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User, OnboardingError> {
        if !self.validator.is_valid(email) {
            return Err(OnboardingError::InvalidEmail(email.to_string()));
        }

        let user = User::new(name, email);
        self.repository.save(&user).await?;
        debug!(user = %user, "user stored");

        self.notifier
            .notify(&user.email, &welcome_message(&user))
            .await?;

        Ok(user)
    }
}

pub fn welcome_message(user: &User) -> String {
    format!("Welcome aboard, {}!", user.name)
}
