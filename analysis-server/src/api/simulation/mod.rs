//! Simulation API module

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/simulation", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/compute", post(handler::compute))
        .route("/scenarios", get(handler::list_scenarios))
        .route("/scenarios", post(handler::save_scenario))
        .route("/scenarios/{id}", delete(handler::delete_scenario))
}
