//! # Adapters
//!
//! Concrete implementations of [`crate::ports`]. None of them talk to a real
//! backend: users are kept in memory and notifications go to the log or to an
//! inspectable buffer.

pub mod email;
pub mod memory;
pub mod notify;

pub use email::EmailValidator;
pub use memory::InMemoryUserRepository;
pub use notify::{LogNotifier, RecordingNotifier};
