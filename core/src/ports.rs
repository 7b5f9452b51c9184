//! # Collaborator Ports
//!
//! Traits the application layer depends on instead of concrete backends.
//!
//! ## Dependency Rule
//! * Services in [`crate::onboarding`] hold these traits as boxed objects.
//! * Implementations live in [`crate::adapters`] (or in the caller's crate).
//! * Swapping a backend never touches the service.
//!
//! The area engine in [`crate::area`] does not use any of them.

pub mod notifier;
pub mod repository;
pub mod validator;

pub use notifier::Notifier;
pub use repository::UserRepository;
pub use validator::Validator;
