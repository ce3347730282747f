//! Care-recommendation dataset (`data.json`).

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One condition entry with its care guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub solutions: Vec<String>,
}

/// The whole dataset document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub chronic_diseases: Vec<DiseaseRecord>,
}

impl Dataset {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// First record whose name equals `name`, ignoring case. Surrounding
    /// whitespace on either side is also ignored, so a record named
    /// `" Asthma "` still matches; an exact lowercase comparison would miss it.
    pub fn find(&self, name: &str) -> Option<&DiseaseRecord> {
        let wanted = name.trim().to_lowercase();
        self.chronic_diseases
            .iter()
            .find(|r| r.name.trim().to_lowercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.chronic_diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chronic_diseases.is_empty()
    }
}
