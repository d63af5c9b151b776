//! Fila Client - HTTP client for the barbershop queue API
//!
//! Provides network-based HTTP calls to the queue API, plus the client-side
//! plumbing the frontends share: auth session, query cache, and fixed
//! interval polling.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod poll;
pub mod session;

pub use api::AdminDashboardQuery;
pub use cache::{QueryCache, keys};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use poll::Poller;
pub use session::Session;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
