//! GRC Common - Shared types, errors, and configuration for the GRC AI Engine.
//!
//! Used by both the backend daemon (grcd) and the frontend relay (grcweb).

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
