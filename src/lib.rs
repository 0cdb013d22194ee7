//! UZM book shop server
//!
//! A REST JSON API for a university book rental/sale shop: a book catalog
//! with a paired per-book inventory, plus simple user accounts with a
//! usm_pesos balance.

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// Connection pool handle for liveness probes; domain access goes
    /// through the services.
    pub pool: Pool<Postgres>,
}
