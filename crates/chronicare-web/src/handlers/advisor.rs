//! Advisor page — free-text condition form, recommendations and charts.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use crate::controller::{overview, submit};
use crate::error::ApiError;
use crate::render::render_advisor_page;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AdviceForm {
    #[serde(default)]
    pub condition: String,
}

/// GET / — empty form plus the dataset overview chart
pub async fn advisor_page(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let overview = overview(state.source.as_ref()).await;
    let html = render_advisor_page(&state.templates, None, None, overview.as_deref())?;
    Ok(Html(html))
}

/// POST / — resolve the submitted text and render the outcome
pub async fn advisor_submit(
    State(state): State<SharedState>,
    Form(form): Form<AdviceForm>,
) -> Result<Html<String>, ApiError> {
    let source = state.source.as_ref();
    // Lookup and overview each fetch the dataset on their own
    let (view, overview) = tokio::join!(
        submit(source, &form.condition),
        overview(source),
    );

    let html = render_advisor_page(
        &state.templates,
        Some(form.condition.trim()),
        view.as_ref(),
        overview.as_deref(),
    )?;
    Ok(Html(html))
}
