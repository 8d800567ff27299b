//! GearGuard Server - Maintenance Request Tracking System
//!
//! REST API server for the equipment registry, technician teams, the
//! maintenance request workflow, and the AI dispatch advisor.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gearguard_server::{
    api,
    config::AppConfig,
    services::{advisory::GatewayClient, Services},
    store::{Store, SystemClock, UuidGen},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            format!("gearguard_server={},tower_http=debug", config.logging.level).into()
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GearGuard Server v{}", env!("CARGO_PKG_VERSION"));

    // Create the in-memory store and seed the demo roster.
    // State is per-process and resets on restart.
    let store = Store::new(SystemClock, UuidGen);
    store.load_demo();
    tracing::info!(
        teams = store.list_teams().len(),
        equipment = store.list_equipment().len(),
        requests = store.list_requests().len(),
        "Demo dataset loaded"
    );

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services
    let advisory = Arc::new(GatewayClient::new(config.dispatch.clone()));
    let services = Services::new(store, advisory);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/signup", post(api::auth::signup))
        .route("/auth/me", get(api::auth::me))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/profile", get(api::auth::get_profile))
        .route("/auth/profile", put(api::auth::update_profile))
        // Maintenance requests
        .route("/requests", get(api::requests::list_requests))
        .route("/requests", post(api::requests::create_request))
        .route("/requests/:id", get(api::requests::get_request))
        .route("/requests/:id", put(api::requests::update_request))
        .route("/requests/:id/status", put(api::requests::update_request_status))
        // AI dispatch
        .route("/requests/:id/dispatch", post(api::dispatch::dispatch_request))
        .route("/requests/:id/dispatch", delete(api::dispatch::dismiss_dispatch))
        .route("/requests/:id/dispatch/apply", post(api::dispatch::apply_dispatch))
        .route("/requests/:id/analyze", post(api::dispatch::analyze_request))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id/status", put(api::equipment::update_equipment_status))
        .route("/equipment/:id/requests", get(api::equipment::equipment_requests))
        .route(
            "/equipment/:id/reassign-team",
            post(api::dispatch::reassign_equipment_team),
        )
        // Teams
        .route("/teams", get(api::teams::list_teams))
        .route("/teams", post(api::teams::create_team))
        .route("/teams/:id", get(api::teams::get_team))
        .route("/teams/:id/technicians", post(api::teams::add_technician))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
