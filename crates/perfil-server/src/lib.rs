//! perfil-server
//!
//! HTTP surface over the questionnaires: definitions, evaluation, report
//! downloads and plain-text export.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/assessments", get(routes::assessments::list_assessments))
        .route(
            "/assessments/{variant}",
            get(routes::assessments::get_assessment),
        )
        .route(
            "/assessments/{variant}/evaluate",
            post(routes::assessments::evaluate_assessment),
        )
        .route(
            "/assessments/{variant}/report",
            post(routes::assessments::export_report),
        )
        .route("/export", post(routes::export::export_document))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
