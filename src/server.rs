// 🌐 Hazard Catalog - read-only REST API with Axum
//
// Every handler is a pure lookup against the compiled-in registries, so the
// router carries no state.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::Domain;
use crate::option::CategoryOption;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn err(data: T, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            error: Some(error.into()),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/options/:domain - Full option list for one registry
async fn domain_options(Path(domain): Path<String>) -> Response {
    match Domain::parse(&domain) {
        Ok(domain) => {
            let options = domain.options();
            debug!(%domain, count = options.len(), "serving option list");
            (StatusCode::OK, Json(ApiResponse::ok(options))).into_response()
        }
        Err(e) => {
            warn!(%domain, "option list requested for unknown domain");
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::err(Vec::<CategoryOption>::new(), e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET /api/options/:domain/:label - Single option by exact display label
async fn lookup_option(Path((domain, label)): Path<(String, String)>) -> Response {
    match Domain::parse(&domain).and_then(|domain| domain.lookup(&label)) {
        Ok(option) => (StatusCode::OK, Json(ApiResponse::ok(Some(option)))).into_response(),
        Err(e) => {
            debug!(%domain, %label, "label lookup missed");
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<CategoryOption>>::err(None, e.to_string())),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the catalog router. Everything lives under `/api`.
pub fn router() -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/options/:domain", get(domain_options))
        .route("/options/:domain/:label", get(lookup_option));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
