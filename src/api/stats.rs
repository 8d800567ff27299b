//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

use super::AuthenticatedUser;

/// Headline dashboard counters
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_equipment: usize,
    pub active_equipment: usize,
    /// Requests not yet repaired or scrapped
    pub open_requests: usize,
    pub completed_requests: usize,
    /// Open requests scheduled before today
    pub overdue_requests: usize,
    /// Critical-priority requests not yet repaired
    pub critical_requests: usize,
}

/// Dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn get_stats(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<DashboardStats> {
    Json(state.services.stats.dashboard())
}
