//! Router construction for the Arcboard contract API.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use arc_contracts::{ContractError, ContractStudio};

use crate::error::ApiError;
use crate::handlers;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub studio: Arc<ContractStudio>,
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(studio: ContractStudio, expose_error_details: bool) -> Self {
        Self {
            studio: Arc::new(studio),
            expose_error_details,
        }
    }

    pub fn api_error(&self, err: ContractError) -> ApiError {
        ApiError::from_contract_error(err, self.expose_error_details)
    }
}

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/contracts/templates",
            get(handlers::contracts::list_templates),
        )
        .route(
            "/api/contracts/templates/:id",
            get(handlers::contracts::get_template),
        )
        .route(
            "/api/contracts/categories",
            get(handlers::contracts::list_categories),
        )
        .route(
            "/api/contracts/validate",
            post(handlers::contracts::validate),
        )
        .route(
            "/api/contracts/generate",
            post(handlers::contracts::generate),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
