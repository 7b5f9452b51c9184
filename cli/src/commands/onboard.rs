use std::sync::Arc;

use tracing::info;

use crate::terminal::print;
use solid_common::config::Config;
use solid_common::models::User;
use solid_core::adapters::{EmailValidator, InMemoryUserRepository, LogNotifier};
use solid_core::onboarding::OnboardingService;

pub async fn onboard(name: &str, email: &str, cfg: &Config) -> anyhow::Result<()> {
    let repository: Arc<InMemoryUserRepository> = Arc::new(InMemoryUserRepository::new());
    let service: OnboardingService = OnboardingService::new(
        Box::new(EmailValidator),
        Box::new(repository.clone()),
        Box::new(LogNotifier),
    );

    print::header("onboarding", cfg.quiet);
    let user: User = service.create_user(name, email).await?;
    info!("User created successfully");

    if cfg.quiet < 2 {
        print::set_key_width(&["Name", "Email", "Stored"]);
        print::aligned_line("Name", user.name);
        print::aligned_line("Email", user.email);
        print::aligned_line("Stored", repository.len().to_string());
    }
    Ok(())
}
