//! Per-request authorization.

pub mod engine;

pub use engine::{AccessDecision, AuthorizationEngine, DenyReason};
