use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatmapError>;

#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request to {url} failed with HTTP status {status}")]
    HttpStatus { status: u16, url: String },

    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Month {month} of year {year} is outside 1..=12")]
    InvalidMonth { year: i32, month: u32 },

    #[error("No sample for year {year}, month {month}")]
    SampleNotFound { year: i32, month: u32 },

    #[error("Dataset contains no monthly variance samples")]
    EmptyDataset,

    #[error("Invalid threshold table: {0}")]
    InvalidThresholds(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl HeatmapError {
    /// Transport failures, including non-success HTTP responses
    pub fn is_network(&self) -> bool {
        matches!(self, HeatmapError::Network(_) | HeatmapError::HttpStatus { .. })
    }

    /// The payload arrived but could not be read as a dataset
    pub fn is_parse(&self) -> bool {
        matches!(self, HeatmapError::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let status = HeatmapError::HttpStatus {
            status: 404,
            url: "https://example.invalid/data.json".to_string(),
        };
        assert!(status.is_network());
        assert!(!status.is_parse());

        let parse: HeatmapError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(parse.is_parse());
        assert!(!parse.is_network());

        let month = HeatmapError::InvalidMonth { year: 1900, month: 13 };
        assert!(!month.is_network());
        assert_eq!(month.to_string(), "Month 13 of year 1900 is outside 1..=12");
    }
}
