//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routes, extractors and middleware
//! - `mysql` - sqlx-backed `FeedbackThreadRepository`
//! - `memory` - In-process `FeedbackThreadRepository` for tests and local runs
//! - `auth` - `SessionValidator` implementations

pub mod auth;
pub mod http;
pub mod memory;
pub mod mysql;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use memory::InMemoryFeedbackThreadRepository;
pub use mysql::MySqlFeedbackThreadRepository;
