//! HTTP API modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`countries`] - country catalog (fee defaults)
//! - [`products`] - product catalog
//! - [`analysis`] - computed analysis tables, overrides, ad spend
//! - [`snapshots`] - period snapshot lifecycle
//! - [`history`] - rollups over saved snapshots
//! - [`simulation`] - what-if scenario calculator

pub mod analysis;
pub mod countries;
pub mod health;
pub mod history;
pub mod products;
pub mod simulation;
pub mod snapshots;

use std::time::Duration;

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(countries::router())
        .merge(products::router())
        .merge(analysis::router())
        .merge(snapshots::router())
        .merge(history::router())
        .merge(simulation::router())
        .merge(health::router())
}

/// Build a fully configured application with all middleware
pub fn build_app(state: ServerState) -> Router<ServerState> {
    build_router()
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Cut off requests that outlive the configured timeout
        .layer(TimeoutLayer::new(Duration::from_millis(
            state.config.request_timeout_ms,
        )))
        // Request ID - generate a unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
