//! Analysis API module
//!
//! Computed tables plus the two write paths feeding them: metric
//! overrides (the flush point for cell edits) and daily ad spend.

mod handler;

use axum::{
    Router,
    routing::{get, patch, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/analysis", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{country_id}", get(handler::table))
        .route(
            "/{country_id}/overrides/{product_id}",
            patch(handler::patch_override),
        )
        .route("/ad-spend", put(handler::record_ad_spend))
        .route("/ad-spend/{product_id}", get(handler::list_ad_spend))
}
