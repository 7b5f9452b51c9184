//! # Solid Core
//!
//! Extensible designs around one idea: code depends on a capability, never on
//! the concrete type behind it.
//!
//! ## Layout
//! * **[`shape`]** and **[`area`]**: the area capability, its built-in variants
//!   and the engine that sums any sequence of them.
//! * **[`registry`]**: named constructors so new variants plug in at runtime.
//! * **[`ports`]** / **[`adapters`]**: collaborator contracts and the in-memory
//!   or log-only implementations of them.
//! * **[`onboarding`]**: a service written purely against [`ports`].
//! * **[`workforce`]** and **[`aviary`]**: segregated roles and substitutable
//!   hierarchies.

pub mod adapters;
pub mod area;
pub mod aviary;
pub mod onboarding;
pub mod ports;
pub mod registry;
pub mod shape;
pub mod workforce;

pub use area::{AreaCalculator, par_total_area, total_area};
pub use shape::{Circle, Rectangle, Shape, Triangle};
