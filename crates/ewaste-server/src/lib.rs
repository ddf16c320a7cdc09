//! E-waste classification service
//!
//! HTTP API that classifies discarded electronics by hazard level, records
//! each user's submissions, and serves hazard and recycling center
//! reference data.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod stats;
pub mod store;

pub use config::{ConfigOverrides, ServerConfig};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
