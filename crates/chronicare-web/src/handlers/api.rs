//! JSON endpoints mirroring the advisor page.

use axum::{extract::State, response::IntoResponse, Json};
use chronicare_common::{solution_count_points, ChartPoint, Dataset};
use serde::Deserialize;
use serde_json::json;
use crate::controller::submit;
use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AdviceRequest {
    #[serde(default)]
    pub text: String,
}

/// POST /api/advice — view model as JSON; blank text yields `{"status":"empty"}`
pub async fn api_advice(
    State(state): State<SharedState>,
    Json(req): Json<AdviceRequest>,
) -> impl IntoResponse {
    match submit(state.source.as_ref(), &req.text).await {
        Some(view) => Json(json!(view)),
        None => Json(json!({ "status": "empty" })),
    }
}

/// GET /api/overview — disease name vs. solution count
pub async fn api_overview(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ChartPoint>>, ApiError> {
    let dataset = state.source.fetch().await?;
    Ok(Json(solution_count_points(&dataset)))
}

/// GET /data.json — the configured dataset as currently served
pub async fn dataset_json(State(state): State<SharedState>) -> Result<Json<Dataset>, ApiError> {
    Ok(Json(state.source.fetch().await?))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
