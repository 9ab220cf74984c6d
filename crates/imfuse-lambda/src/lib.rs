//! imfuse-lambda
//!
//! HTTP surface for the fusion form controller. Stateless: every request
//! carries the full configuration vector and receives a full replacement
//! registration list.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::http::HeaderValue;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(state.config.allowed_origin.clone());

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/fusion/modes", get(routes::fusion::list_modes))
        .route("/fusion/modes/{tag}", get(routes::fusion::get_mode))
        .route("/fusion/classify", post(routes::fusion::classify))
        .route("/fusion/registrations", post(routes::fusion::registrations))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}
