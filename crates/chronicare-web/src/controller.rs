//! Presentation controller — turns a submission into a view model.
//!
//! The controller never touches HTML. It returns an [`AdviceView`] which the
//! rendering boundary (`crate::render`) or the JSON API consumes.

use chronicare_common::{
    lookup, match_condition, normalize_input, solution_count_points, solution_points,
    ChartPoint, Condition, DatasetSource, LookupError,
};
use serde::Serialize;
use tracing::{debug, info, warn};

pub const NOT_UNDERSTOOD_MESSAGE: &str = "I didn't understand. Please try again.";

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdviceView {
    NotUnderstood {
        message: String,
    },
    NotFound {
        condition: Condition,
        message: String,
    },
    Unavailable {
        condition: Condition,
        message: String,
    },
    Found {
        condition: Condition,
        description: String,
        solutions: Vec<String>,
        chart: Vec<ChartPoint>,
    },
}

impl AdviceView {
    pub fn not_understood() -> Self {
        AdviceView::NotUnderstood { message: NOT_UNDERSTOOD_MESSAGE.to_string() }
    }

    pub fn not_found(condition: Condition) -> Self {
        AdviceView::NotFound {
            condition,
            message: format!("No information found for {}.", condition),
        }
    }

    pub fn unavailable(condition: Condition) -> Self {
        AdviceView::Unavailable {
            condition,
            message: format!(
                "Care recommendations for {} are unavailable right now. Please try again later.",
                condition
            ),
        }
    }

    /// User-facing message for the miss variants.
    pub fn message(&self) -> Option<&str> {
        match self {
            AdviceView::NotUnderstood { message }
            | AdviceView::NotFound { message, .. }
            | AdviceView::Unavailable { message, .. } => Some(message),
            AdviceView::Found { .. } => None,
        }
    }

    pub fn chart(&self) -> &[ChartPoint] {
        match self {
            AdviceView::Found { chart, .. } => chart,
            _ => &[],
        }
    }

    /// The chart panel is shown for every found record; an empty series is
    /// simply not drawn.
    pub fn chart_visible(&self) -> bool {
        matches!(self, AdviceView::Found { .. })
    }
}

/// Handle one submission. Blank input yields `None`, leaving the page as it was.
pub async fn submit(source: &dyn DatasetSource, raw_input: &str) -> Option<AdviceView> {
    let input = normalize_input(raw_input);
    if input.is_empty() {
        debug!("Ignoring empty submission");
        return None;
    }

    let Some(condition) = match_condition(&input) else {
        info!(input = %input, "No condition keyword in submission");
        return Some(AdviceView::not_understood());
    };

    let view = match lookup(source, condition).await {
        Ok(rec) => AdviceView::Found {
            condition,
            chart: solution_points(&rec.solutions),
            description: rec.description,
            solutions: rec.solutions,
        },
        Err(LookupError::NotFound(c)) => AdviceView::not_found(c),
        Err(LookupError::Unavailable { condition, .. }) => AdviceView::unavailable(condition),
    };
    Some(view)
}

/// Aggregate chart of disease name vs. solution count. Runs independently of
/// any submission; failure only drops the chart.
pub async fn overview(source: &dyn DatasetSource) -> Option<Vec<ChartPoint>> {
    match source.fetch().await {
        Ok(dataset) => Some(solution_count_points(&dataset)),
        Err(e) => {
            warn!(source = %source.describe(), error = %e, "Overview dataset fetch failed");
            None
        }
    }
}
