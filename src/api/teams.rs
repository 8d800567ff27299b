//! Team API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::team::{CreateTeam, CreateTechnician, Team, Technician},
    AppState,
};

use super::AuthenticatedUser;

/// List all teams with their technician rosters
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team list", body = Vec<Team>)
    )
)]
pub async fn list_teams(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<Vec<Team>> {
    Json(state.services.lifecycle.list_teams())
}

/// Get a team by ID
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details", body = Team)
    )
)]
pub async fn get_team(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<Team>> {
    let team = state.services.lifecycle.get_team(&id)?;
    Ok(Json(team))
}

/// Create a team with an optional initial roster
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    security(("bearer_auth" = [])),
    request_body = CreateTeam,
    responses(
        (status = 201, description = "Team created", body = Team)
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(data): Json<CreateTeam>,
) -> AppResult<(StatusCode, Json<Team>)> {
    let team = state.services.lifecycle.create_team(data)?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Add a technician to a team
#[utoipa::path(
    post,
    path = "/teams/{id}/technicians",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Team ID")),
    request_body = CreateTechnician,
    responses(
        (status = 201, description = "Technician added", body = Technician)
    )
)]
pub async fn add_technician(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(data): Json<CreateTechnician>,
) -> AppResult<(StatusCode, Json<Technician>)> {
    let technician = state.services.lifecycle.add_technician(&id, data)?;
    Ok((StatusCode::CREATED, Json(technician)))
}
