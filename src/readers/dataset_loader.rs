use reqwest::Client;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{HeatmapError, Result};
use crate::models::RawDataset;
use crate::settings::SourceConfig;
use crate::utils::progress::ProgressReporter;

/// Where the dataset document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a dataset document
pub fn parse_dataset(body: &str) -> Result<RawDataset> {
    Ok(serde_json::from_str(body)?)
}

/// Fetches or reads the dataset document. One load per instance use; no retries.
pub struct DatasetLoader {
    client: Client,
}

impl DatasetLoader {
    pub fn new(source_config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(source_config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    pub async fn load(
        &self,
        source: &DataSource,
        progress: Option<&ProgressReporter>,
    ) -> Result<RawDataset> {
        if let Some(progress) = progress {
            progress.set_message(&format!("Loading {}", source));
        }

        let raw = match source {
            DataSource::Url(url) => self.fetch(url).await?,
            DataSource::File(path) => self.read_file(path).await?,
        };

        info!(
            "Loaded {} monthly samples (base temperature {}) from {}",
            raw.monthly_variance.len(),
            raw.base_temperature,
            source
        );
        Ok(raw)
    }

    /// GET the document and parse it; non-success statuses are network failures
    pub async fn fetch(&self, url: &str) -> Result<RawDataset> {
        debug!("Fetching dataset from {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeatmapError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        parse_dataset(&body)
    }

    pub async fn read_file(&self, path: &Path) -> Result<RawDataset> {
        debug!("Reading dataset from {}", path.display());
        let body = tokio::fs::read_to_string(path).await?;
        parse_dataset(&body)
    }
}
