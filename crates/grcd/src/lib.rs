//! GRC AI Engine daemon - compliance tool-recommendation lookups.
//!
//! Checks a static hand-curated knowledge base first, then falls back to an
//! external text-generation provider on a miss.

pub mod auth;
pub mod generator;
pub mod knowledge;
pub mod parser;
pub mod pipeline;
pub mod routes;
pub mod server;
pub mod standards;
pub mod validate;
