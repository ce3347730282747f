//! Chart data builders for the solution and overview bar charts.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
}

/// One point per solution; value is the 1-based position in the list.
pub fn solution_points(solutions: &[String]) -> Vec<ChartPoint> {
    solutions
        .iter()
        .enumerate()
        .map(|(i, s)| ChartPoint {
            label: s.clone(),
            value: (i + 1) as u32,
        })
        .collect()
}

/// One point per disease in dataset order; value is its solution count.
pub fn solution_count_points(dataset: &Dataset) -> Vec<ChartPoint> {
    dataset
        .chronic_diseases
        .iter()
        .map(|r| ChartPoint {
            label: r.name.clone(),
            value: r.solutions.len() as u32,
        })
        .collect()
}
