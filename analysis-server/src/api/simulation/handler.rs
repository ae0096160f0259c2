//! Simulation API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::simulation;
use crate::utils::AppResult;
use shared::models::{SavedScenario, ScenarioInputs, ScenarioResults};

/// POST /api/simulation/compute - project results without saving
pub async fn compute(
    Json(inputs): Json<ScenarioInputs>,
) -> AppResult<Json<ScenarioResults>> {
    Ok(Json(simulation::compute(&inputs)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    pub name: String,
    pub inputs: ScenarioInputs,
}

/// POST /api/simulation/scenarios - compute and save under a name
pub async fn save_scenario(
    State(state): State<ServerState>,
    Json(payload): Json<SavePayload>,
) -> AppResult<Json<SavedScenario>> {
    let scenario = state.scenarios.save(&payload.name, payload.inputs)?;
    Ok(Json(scenario))
}

/// GET /api/simulation/scenarios - saved scenarios in save order
pub async fn list_scenarios(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<SavedScenario>>> {
    Ok(Json(state.scenarios.list()))
}

/// DELETE /api/simulation/scenarios/:id
pub async fn delete_scenario(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.scenarios.delete(&id)?;
    Ok(Json(true))
}
