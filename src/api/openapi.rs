//! OpenAPI documentation

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, dispatch, equipment, health, requests, stats, teams};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearGuard API",
        version = "0.1.0",
        description = "Maintenance Request Tracking System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "GearGuard Team", email = "contact@gearguard.io")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&BearerAuth),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::signup,
        auth::me,
        auth::logout,
        auth::get_profile,
        auth::update_profile,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::update_request,
        requests::update_request_status,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::update_equipment_status,
        equipment::equipment_requests,
        // Teams
        teams::list_teams,
        teams::get_team,
        teams::create_team,
        teams::add_technician,
        // Dispatch
        dispatch::dispatch_request,
        dispatch::apply_dispatch,
        dispatch::dismiss_dispatch,
        dispatch::analyze_request,
        dispatch::reassign_equipment_team,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::LoginRequest,
            crate::models::user::SignupRequest,
            crate::models::user::LoginResponse,
            crate::models::user::User,
            crate::models::user::UserProfile,
            crate::models::user::UpdateProfile,
            crate::models::enums::Role,
            // Requests
            crate::models::request::MaintenanceRequest,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateRequest,
            crate::models::request::UpdateRequestStatus,
            crate::models::enums::RequestStatus,
            crate::models::enums::MaintenanceType,
            crate::models::enums::Priority,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::UpdateEquipmentStatus,
            crate::models::enums::EquipmentStatus,
            // Teams
            crate::models::team::Team,
            crate::models::team::Technician,
            crate::models::team::CreateTeam,
            crate::models::team::CreateTechnician,
            crate::models::team::TeamSummary,
            // Dispatch
            crate::models::recommendation::Recommendation,
            crate::models::recommendation::PopupOutput,
            crate::models::recommendation::RecommendationSummary,
            crate::models::recommendation::RecommendationActions,
            crate::models::recommendation::TeamAnalysis,
            crate::models::recommendation::TechnicianWorkload,
            crate::models::recommendation::ApplyRecommendation,
            crate::models::recommendation::ReassignTeam,
            crate::models::enums::Confidence,
            // Stats
            stats::DashboardStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Demo authentication"),
        (name = "requests", description = "Maintenance request workflow"),
        (name = "equipment", description = "Equipment registry"),
        (name = "teams", description = "Technician teams"),
        (name = "dispatch", description = "AI dispatch advisor"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
