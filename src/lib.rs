//! GearGuard Maintenance Tracking System
//!
//! A Rust implementation of the GearGuard maintenance server, providing a
//! REST JSON API for the equipment registry, technician teams, the
//! maintenance request workflow, and the AI-assisted dispatch advisor.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
