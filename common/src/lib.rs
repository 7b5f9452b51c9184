//! Types shared by every `solid` crate: configuration, the user model and the
//! error taxonomy of the collaborator layers.

pub mod config;
pub mod error;
pub mod models;
