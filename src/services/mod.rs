//! Business logic services

pub mod advisory;
pub mod auth;
pub mod dispatch;
pub mod lifecycle;
pub mod stats;

use std::sync::Arc;

use crate::store::Store;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub lifecycle: lifecycle::LifecycleService,
    pub dispatch: dispatch::DispatchService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given store and advisory client
    pub fn new(store: Store, advisory: Arc<dyn advisory::AdvisoryClient>) -> Self {
        Self {
            auth: auth::AuthService::new(),
            lifecycle: lifecycle::LifecycleService::new(store.clone()),
            dispatch: dispatch::DispatchService::new(store.clone(), advisory),
            stats: stats::StatsService::new(store),
        }
    }
}
