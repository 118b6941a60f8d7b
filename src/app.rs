use axum::{
    http::{HeaderValue, StatusCode},
    middleware::from_fn,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{self, AppConfig};
use crate::database::DatabaseManager;
use crate::handlers;
use crate::middleware::jwt_auth_middleware;

pub fn app() -> Router {
    let config = config::config();

    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(navigation_routes())
        // Protected
        .merge(identity_routes())
        .layer(cors_layer(config));

    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn navigation_routes() -> Router {
    use handlers::public;

    Router::new()
        .route("/api/navigation/tree", get(public::navigation_tree))
        .route("/api/navigation/children", get(public::navigation_children))
        .route("/api/navigation/breadcrumbs", get(public::navigation_breadcrumbs))
}

fn identity_routes() -> Router {
    use handlers::protected;

    Router::new()
        .route("/api/users/me", get(protected::user_me))
        .route("/api/teams/:team_id/members", get(protected::team_members))
        .route_layer(from_fn(jwt_auth_middleware))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if crate::is_development!() {
        return CorsLayer::permissive();
    }
    if !config.security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();
    CorsLayer::new().allow_origin(origins)
}

async fn root() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": "HQ Portal API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "health": "/health (public)",
                "navigation": "/api/navigation/tree, /api/navigation/children?section=, /api/navigation/breadcrumbs?path= (public)",
                "users": "/api/users/me (protected)",
                "teams": "/api/teams/:team_id/members (protected)",
            }
        }
    }))
}

async fn health() -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
