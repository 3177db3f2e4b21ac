//! HTTP API Layer
//!
//! This crate provides the REST API for the premium rating service using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Premium calculation and health endpoints
//! - **Middleware**: Request-id generation, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(rates, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, routing::post, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_rating::RateLookup;

use crate::config::ApiConfig;
use crate::handlers::{health, premium};
use crate::middleware::{audit_middleware, RequestIdGenerator};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The rating reference-data port
    pub rates: Arc<dyn RateLookup>,
    /// API configuration, including the base rate fixed at startup
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `rates` - The rating reference-data port (database-backed in
///   production, mock in tests)
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(rates: Arc<dyn RateLookup>, config: ApiConfig) -> Router {
    let state = AppState { rates, config };

    // Operational routes, outside the audit trail
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Premium routes
    let premium_routes = Router::new().route("/calculate", post(premium::calculate_premium));

    let api_routes = Router::new()
        .nest("/premium", premium_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
