//! Shared types for the Fila queue client
//!
//! Domain models and API DTOs used by both the client library and the
//! terminal frontend. Wire shapes follow the external queue API.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
