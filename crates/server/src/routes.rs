use axum::{
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{openapi::ApiDoc, store};

pub mod businesses;
pub mod customers;
pub mod init;
pub mod officers;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health and docs at the root, data routes under `/api`.
pub fn build_router(state: store::AppState, cors: CorsLayer) -> Router {
    // every data route gets its own store session
    let api = Router::new()
        .route("/init", get(init::get_init))
        .route("/customers", get(customers::list).post(customers::upsert))
        .route("/customers/:id", delete(customers::delete))
        .route("/officers", get(officers::list).post(officers::upsert))
        .route("/officers/:id", delete(officers::delete))
        .route("/businesses", post(businesses::upsert))
        .route("/businesses/:name", delete(businesses::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), store::open_store));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
