//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, auth)
//! - `feedback` - Feedback thread collection and close semantics

pub mod feedback;
pub mod foundation;
