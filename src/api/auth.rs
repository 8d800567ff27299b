//! Authentication and profile endpoints (demo auth)

use axum::{extract::State, http::request::Parts, Json};

use crate::{
    error::AppResult,
    models::user::{LoginRequest, LoginResponse, SignupRequest, UpdateProfile, User, UserProfile},
    AppState,
};

use super::{bearer_token, AuthenticatedUser};

/// Log in with any well-formed email and a 4+ character password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(data): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state.services.auth.login(data)?;
    Ok(Json(response))
}

/// Create a demo account and open a session
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(data): Json<SignupRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state.services.auth.signup(data)?;
    Ok(Json(response))
}

/// Current session user
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session user", body = User)
    )
)]
pub async fn me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}

/// Close the current session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session closed")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    parts: Parts,
) -> AppResult<axum::http::StatusCode> {
    let token = bearer_token(&parts)?;
    state.services.auth.logout(token);
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// Admin profile
#[utoipa::path(
    get,
    path = "/auth/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = UserProfile)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<UserProfile> {
    Json(state.services.auth.profile())
}

/// Update the admin profile
#[utoipa::path(
    put,
    path = "/auth/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = UpdateProfile,
    responses(
        (status = 200, description = "Profile updated", body = UserProfile)
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(patch): Json<UpdateProfile>,
) -> AppResult<Json<UserProfile>> {
    let profile = state.services.auth.update_profile(&patch)?;
    Ok(Json(profile))
}
