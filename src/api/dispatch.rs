//! AI dispatch endpoints
//!
//! Recommendations are advisory: fetching one never changes any record,
//! and the apply endpoints are the only way a suggestion reaches the
//! store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        equipment::Equipment,
        recommendation::{ApplyRecommendation, Recommendation, ReassignTeam, TeamAnalysis},
        request::MaintenanceRequest,
    },
    AppState,
};

use super::AuthenticatedUser;

/// Fetch a dispatch recommendation for a request
#[utoipa::path(
    post,
    path = "/requests/{id}/dispatch",
    tag = "dispatch",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Advisory recommendation", body = Recommendation),
        (status = 409, description = "Superseded by a newer fetch"),
        (status = 502, description = "Advisory gateway failure")
    )
)]
pub async fn dispatch_request(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<Recommendation>> {
    let recommendation = state.services.dispatch.recommend(&id).await?;
    Ok(Json(recommendation))
}

/// Apply a fetched recommendation to the request (explicit confirmation)
#[utoipa::path(
    post,
    path = "/requests/{id}/dispatch/apply",
    tag = "dispatch",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    request_body = ApplyRecommendation,
    responses(
        (status = 200, description = "Reassignment applied", body = MaintenanceRequest),
        (status = 404, description = "Team, technician, or request not found")
    )
)]
pub async fn apply_dispatch(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(data): Json<ApplyRecommendation>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state
        .services
        .dispatch
        .apply(&id, &data.team_id, &data.technician_id)?;
    Ok(Json(request))
}

/// Dismiss any in-flight recommendation for the request
#[utoipa::path(
    delete,
    path = "/requests/{id}/dispatch",
    tag = "dispatch",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 204, description = "Recommendation dismissed")
    )
)]
pub async fn dismiss_dispatch(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> StatusCode {
    state.services.dispatch.dismiss(&id);
    StatusCode::NO_CONTENT
}

/// Validate the team currently assigned to a request's equipment
#[utoipa::path(
    post,
    path = "/requests/{id}/analyze",
    tag = "dispatch",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Team analysis", body = TeamAnalysis)
    )
)]
pub async fn analyze_request(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<TeamAnalysis>> {
    let analysis = state.services.dispatch.analyze(&id).await?;
    Ok(Json(analysis))
}

/// Reassign an equipment's maintenance team from an analysis result
#[utoipa::path(
    post,
    path = "/equipment/{id}/reassign-team",
    tag = "dispatch",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = ReassignTeam,
    responses(
        (status = 200, description = "Team reassigned", body = Equipment),
        (status = 404, description = "Team or equipment not found")
    )
)]
pub async fn reassign_equipment_team(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(data): Json<ReassignTeam>,
) -> AppResult<Json<Equipment>> {
    let equipment = state
        .services
        .dispatch
        .reassign_equipment_team(&id, &data.team_name)?;
    Ok(Json(equipment))
}
