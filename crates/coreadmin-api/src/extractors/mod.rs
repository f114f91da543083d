//! Typed request extractors.

pub mod auth;

pub use auth::AuthClaims;
