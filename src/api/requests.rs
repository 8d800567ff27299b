//! Maintenance request API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::{
        enums::RequestStatus,
        request::{CreateRequest, MaintenanceRequest, UpdateRequest, UpdateRequestStatus},
    },
    AppState,
};

use super::AuthenticatedUser;

/// Optional list filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct RequestQuery {
    /// Restrict to this workflow status
    pub status: Option<RequestStatus>,
    /// Restrict to requests for this equipment
    pub equipment_id: Option<String>,
}

/// List maintenance requests
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(RequestQuery),
    responses(
        (status = 200, description = "Request list", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_requests(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Query(query): Query<RequestQuery>,
) -> Json<Vec<MaintenanceRequest>> {
    let mut requests = state.services.lifecycle.list_requests();
    if let Some(status) = query.status {
        requests.retain(|r| r.status == status);
    }
    if let Some(equipment_id) = &query.equipment_id {
        requests.retain(|r| &r.equipment_id == equipment_id);
    }
    Json(requests)
}

/// Get a request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = MaintenanceRequest)
    )
)]
pub async fn get_request(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.lifecycle.get_request(&id)?;
    Ok(Json(request))
}

/// Create a request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = MaintenanceRequest)
    )
)]
pub async fn create_request(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceRequest>)> {
    let request = state.services.lifecycle.create_request(data)?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Update a request (partial merge)
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Request updated", body = MaintenanceRequest)
    )
)]
pub async fn update_request(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(patch): Json<UpdateRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.lifecycle.update_request(&id, &patch)?;
    Ok(Json(request))
}

/// Move a request through the workflow. Scrapping a request also marks
/// its equipment as scrapped.
#[utoipa::path(
    put,
    path = "/requests/{id}/status",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    request_body = UpdateRequestStatus,
    responses(
        (status = 200, description = "Status updated", body = MaintenanceRequest)
    )
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(data): Json<UpdateRequestStatus>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state
        .services
        .lifecycle
        .update_request_status(&id, data.status)?;
    Ok(Json(request))
}
