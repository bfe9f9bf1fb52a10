//! Data-source boundary for a page's initial load.
//!
//! A page fetches its rows exactly once per mount. When the fetch fails the page
//! may substitute a configured default list; that substitution is reported in the
//! outcome instead of being hidden in an error branch.

use crate::record::Record;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Rows returned by a fetch, with the server-side total when paginated remotely.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse<R> {
    pub records: Vec<R>,
    pub total: Option<usize>,
}

#[async_trait]
pub trait DataSource<R: Record>: Send + Sync {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<FetchResponse<R>, SourceError>;
}

/// In-memory source with optional simulated latency.
#[derive(Debug, Clone)]
pub struct SeedSource<R> {
    name: String,
    records: Vec<R>,
    latency: Duration,
    failure: Option<SourceError>,
}

impl<R: Record> SeedSource<R> {
    pub fn new(name: &str, records: Vec<R>) -> Self {
        Self {
            name: name.to_string(),
            records,
            latency: Duration::ZERO,
            failure: None,
        }
    }

    /// A source whose every fetch fails with `error`.
    pub fn failing(name: &str, error: SourceError) -> Self {
        Self {
            name: name.to_string(),
            records: Vec::new(),
            latency: Duration::ZERO,
            failure: Some(error),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl<R: Record> DataSource<R> for SeedSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<FetchResponse<R>, SourceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(FetchResponse {
                records: self.records.clone(),
                total: Some(self.records.len()),
            }),
        }
    }
}

/// Reads a JSON array of records from disk.
///
/// Accepts either a bare array or `{ "records": [...], "total": n }`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum FileShape<R> {
    Bare(Vec<R>),
    Wrapped { records: Vec<R>, total: Option<usize> },
}

#[async_trait]
impl<R: Record> DataSource<R> for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<FetchResponse<R>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Unavailable(format!("{}: {}", self.path.display(), e)))?;

        let shape: FileShape<R> =
            serde_json::from_str(&content).map_err(|e| SourceError::InvalidData(e.to_string()))?;

        Ok(match shape {
            FileShape::Bare(records) => {
                let total = Some(records.len());
                FetchResponse { records, total }
            }
            FileShape::Wrapped { records, total } => FetchResponse { records, total },
        })
    }
}

/// Result of a page's initial load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<R> {
    Loaded { records: Vec<R>, total: Option<usize> },
    /// The fetch failed and the configured default list was used instead
    Fallback { records: Vec<R>, error: SourceError },
    Failed(SourceError),
}

impl<R> LoadOutcome<R> {
    pub fn records(&self) -> &[R] {
        match self {
            LoadOutcome::Loaded { records, .. } | LoadOutcome::Fallback { records, .. } => records,
            LoadOutcome::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&SourceError> {
        match self {
            LoadOutcome::Loaded { .. } => None,
            LoadOutcome::Fallback { error, .. } | LoadOutcome::Failed(error) => Some(error),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::Fallback { .. })
    }
}

/// Fetch once, substituting `fallback` on failure when one is configured.
pub async fn load_records<R: Record>(source: &dyn DataSource<R>, fallback: Option<Vec<R>>) -> LoadOutcome<R> {
    match source.fetch().await {
        Ok(response) => {
            log::info!("Loaded {} records from {}", response.records.len(), source.name());
            LoadOutcome::Loaded {
                records: response.records,
                total: response.total,
            }
        }
        Err(error) => match fallback {
            Some(records) => {
                log::warn!(
                    "Loading from {} failed ({}), using {} default records",
                    source.name(),
                    error,
                    records.len()
                );
                LoadOutcome::Fallback { records, error }
            }
            None => {
                log::error!("Loading from {} failed: {}", source.name(), error);
                LoadOutcome::Failed(error)
            }
        },
    }
}
