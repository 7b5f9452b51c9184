//! # Error Taxonomy
//!
//! The area engine itself is total and never fails. Everything here belongs to
//! the layers around it: turning text into shapes, and the collaborators the
//! onboarding service depends on.

use thiserror::Error;

/// Failure to turn a textual description such as `rect:10,20` into a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeSpecError {
    #[error("missing dimensions in '{0}', expected <kind>:<dim>[,<dim>...]")]
    MissingDimensions(String),

    #[error("unknown shape kind '{0}'")]
    UnknownKind(String),

    #[error("'{0}' is already a shape kind and cannot be an alias")]
    AliasConflict(String),

    #[error("{kind} takes {expected} dimension(s), got {found}")]
    WrongArity {
        kind: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

/// Raised by a persistence backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("record '{0}' already exists")]
    Duplicate(String),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Raised by a notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not deliver to {target}: {reason}")]
pub struct DeliveryError {
    pub target: String,
    pub reason: String,
}

impl DeliveryError {
    pub fn new(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    #[error("invalid email '{0}'")]
    InvalidEmail(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
