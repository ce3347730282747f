//! Dataset sources — where `data.json` is fetched from.
//!
//! Every call to [`DatasetSource::fetch`] performs a fresh read; nothing is
//! cached between fetches.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::dataset::Dataset;
use crate::error::{CareError, Result};

/// Common interface for anything that can produce the dataset document.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and parse the full dataset.
    async fn fetch(&self) -> Result<Dataset>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Build a source from a configured location: `http(s)://` URLs are fetched
/// over the network, anything else is treated as a filesystem path.
pub fn source_from_location(location: &str, timeout: Duration) -> Result<Arc<dyn DatasetSource>> {
    let location = location.trim();
    if location.is_empty() {
        return Err(CareError::Config("dataset source is empty".to_string()));
    }
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Arc::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Arc::new(FileSource::new(location)))
    }
}

// ── File ─────────────────────────────────────────────────────────────────────

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Dataset> {
        let bytes = tokio::fs::read(&self.path).await?;
        let dataset = Dataset::from_json(&bytes)?;
        debug!(records = dataset.len(), "Dataset read from file");
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ── HTTP ─────────────────────────────────────────────────────────────────────

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Dataset> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CareError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let bytes = resp.bytes().await?;
        let dataset = Dataset::from_json(&bytes)?;
        debug!(records = dataset.len(), "Dataset fetched over HTTP");
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

// ── In-memory ────────────────────────────────────────────────────────────────

/// Serves a fixed JSON document; parsed on every fetch like the other sources.
pub struct StaticSource {
    json: Vec<u8>,
}

impl StaticSource {
    pub fn from_json(json: impl Into<Vec<u8>>) -> Self {
        Self { json: json.into() }
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    async fn fetch(&self) -> Result<Dataset> {
        Dataset::from_json(&self.json)
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DiseaseRecord;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chronicare-{}-{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_file_source_reads_dataset() {
        let path = temp_path("file-ok");
        std::fs::write(&path, r#"{"chronic_diseases":[{"name":"Asthma","description":"d","solutions":["Inhaler"]}]}"#).unwrap();

        let ds = FileSource::new(&path).fetch().await.unwrap();
        assert_eq!(ds.find("asthma").unwrap().solutions, vec!["Inhaler"]);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let err = FileSource::new(temp_path("does-not-exist")).fetch().await.unwrap_err();
        assert!(matches!(err, CareError::Io(_)));
    }

    #[tokio::test]
    async fn test_static_source_bad_json_is_serialization_error() {
        let err = StaticSource::from_json("[1, 2").fetch().await.unwrap_err();
        assert!(matches!(err, CareError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_static_source_round_trips_dataset() {
        let ds = Dataset {
            chronic_diseases: vec![DiseaseRecord {
                name: "Obesity".into(),
                description: "d".into(),
                solutions: vec!["Walk".into()],
            }],
        };
        let json = serde_json::to_vec(&ds).unwrap();
        let fetched = StaticSource::from_json(json).fetch().await.unwrap();
        assert_eq!(fetched, ds);
    }

    #[test]
    fn test_source_from_location_picks_kind() {
        let file = source_from_location("data/data.json", Duration::from_secs(5)).unwrap();
        assert_eq!(file.describe(), "data/data.json");

        let http = source_from_location("https://example.org/data.json", Duration::from_secs(5)).unwrap();
        assert_eq!(http.describe(), "https://example.org/data.json");

        assert!(source_from_location("  ", Duration::from_secs(5)).is_err());
    }
}
