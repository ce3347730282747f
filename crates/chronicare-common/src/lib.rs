//! chronicare-common — Keyword matching, dataset lookup and chart data shared by
//! the Chronicare crates.

pub mod error;
pub mod condition;
pub mod dataset;
pub mod source;
pub mod lookup;
pub mod chart;

// Re-export commonly used types
pub use condition::{match_condition, normalize_input, Condition, KeywordRule, KEYWORD_RULES};
pub use dataset::{Dataset, DiseaseRecord};
pub use source::{source_from_location, DatasetSource, FileSource, HttpSource, StaticSource};
pub use error::{CareError, Result};
pub use lookup::{lookup, LookupError, Recommendation};
pub use chart::{solution_count_points, solution_points, ChartPoint};
