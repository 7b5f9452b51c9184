#![cfg(test)]
use std::sync::{Arc, Mutex};

use solid_common::error::{OnboardingError, StorageError};
use solid_common::models::User;
use solid_core::adapters::{EmailValidator, InMemoryUserRepository, LogNotifier, RecordingNotifier};
use solid_core::onboarding::OnboardingService;
use solid_core::ports::{UserRepository, Validator};

/// Backend defined outside `solid-core`: the service accepts it unchanged.
#[derive(Default)]
struct AuditedRepository {
    log: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl UserRepository for AuditedRepository {
    async fn save(&self, user: &User) -> Result<(), StorageError> {
        self.log
            .lock()
            .map_err(|_| StorageError::Unavailable("audit log poisoned".into()))?
            .push(format!("saved {}", user.name));
        Ok(())
    }
}

struct CorporateDomain;

impl Validator for CorporateDomain {
    fn is_valid(&self, input: &str) -> bool {
        input.ends_with("@corp.example")
    }
}

#[tokio::test]
async fn swapping_the_backend_needs_no_service_change() -> anyhow::Result<()> {
    let audit = Arc::new(AuditedRepository::default());
    let service = OnboardingService::new(Box::new(EmailValidator), Box::new(audit.clone()), Box::new(LogNotifier));

    service.create_user("Grace", "grace@navy.mil").await?;

    let log = audit.log.lock().map_err(|_| anyhow::anyhow!("poisoned"))?.clone();
    assert_eq!(log, vec!["saved Grace"]);
    Ok(())
}

#[tokio::test]
async fn swapping_the_validator_changes_the_rule() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let outbox = Arc::new(RecordingNotifier::new());
    let service = OnboardingService::new(Box::new(CorporateDomain), Box::new(repo.clone()), Box::new(outbox.clone()));

    let err = service.create_user("Ada", "ada@example.com").await.unwrap_err();
    assert_eq!(err, OnboardingError::InvalidEmail("ada@example.com".into()));

    let user = service.create_user("Ada", "ada@corp.example").await.unwrap();
    assert_eq!(repo.users(), vec![user]);
    assert_eq!(outbox.sent().len(), 1);
}
