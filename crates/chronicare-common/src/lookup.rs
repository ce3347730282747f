//! Recommendation lookup — condition → description and solutions.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::condition::Condition;
use crate::error::CareError;
use crate::source::DatasetSource;

/// Care guidance for a resolved condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub condition: Condition,
    pub description: String,
    pub solutions: Vec<String>,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No information found for {0}")]
    NotFound(Condition),

    #[error("Dataset unavailable while looking up {condition}: {source}")]
    Unavailable {
        condition: Condition,
        #[source]
        source: CareError,
    },
}

/// Fetch the dataset once and return the first record named like `condition`.
pub async fn lookup(
    source: &dyn DatasetSource,
    condition: Condition,
) -> Result<Recommendation, LookupError> {
    let dataset = source.fetch().await.map_err(|e| {
        warn!(%condition, source = %source.describe(), error = %e, "Dataset fetch failed");
        LookupError::Unavailable { condition, source: e }
    })?;

    match dataset.find(condition.label()) {
        Some(record) => {
            info!(%condition, solutions = record.solutions.len(), "Recommendation found");
            Ok(Recommendation {
                condition,
                description: record.description.clone(),
                solutions: record.solutions.clone(),
            })
        }
        None => {
            warn!(%condition, records = dataset.len(), "No dataset record for condition");
            Err(LookupError::NotFound(condition))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use pretty_assertions::assert_eq;

    const DATA: &str = r#"{"chronic_diseases":[
        {"name":"Hypertension","description":"High pressure in the arteries.","solutions":["Exercise","Low-salt diet"]}
    ]}"#;

    #[tokio::test]
    async fn test_lookup_found() {
        let source = StaticSource::from_json(DATA);
        let rec = lookup(&source, Condition::Hypertension).await.unwrap();
        assert_eq!(rec, Recommendation {
            condition: Condition::Hypertension,
            description: "High pressure in the arteries.".to_string(),
            solutions: vec!["Exercise".to_string(), "Low-salt diet".to_string()],
        });
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let source = StaticSource::from_json(DATA);
        let err = lookup(&source, Condition::Diabetes).await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(Condition::Diabetes)));
        assert_eq!(err.to_string(), "No information found for Diabetes");
    }

    #[tokio::test]
    async fn test_lookup_parse_failure_is_unavailable() {
        let source = StaticSource::from_json("not json");
        let err = lookup(&source, Condition::Asthma).await.unwrap_err();
        assert!(matches!(err, LookupError::Unavailable { condition: Condition::Asthma, .. }));
    }
}
