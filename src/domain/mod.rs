//! Domain layer — pure domain model and shared types.
//!
//! This layer contains types that are used across multiple layers of the
//! system but do not depend on any runtime implementation details.
//!
//! Submodules:
//! - [`model`] — Issue report model (draft, closed category/priority sets,
//!   attachment references) and session/identity types.

pub mod model;
