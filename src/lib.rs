//! Cold Email Template Server Library
//!
//! Quota-gated template persistence and retrieval: the atomic save-and-meter
//! transaction, tier-based capacity calculation, workspace-authorization
//! checks, and filtered/paginated listing.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod token;

pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}
