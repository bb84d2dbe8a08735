//! BVL Feedback - behavioural feedback panel service
//!
//! Closes feedback threads attached to a candidate's behavioural data on
//! behalf of an authenticated platform user.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
