use crate::core::models::configuration::ElectronConfiguration;
use thiserror::Error;

/// Upper bound on materialised rows; the largest single s/p/d/f configuration has 34 594 560.
pub const DEFAULT_MAX_ROWS: u64 = 40_000_000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub configuration: ElectronConfiguration,
    pub max_rows: u64,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    configuration: Option<ElectronConfiguration>,
    max_rows: Option<u64>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configuration(mut self, configuration: ElectronConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }
    pub fn max_rows(mut self, max_rows: u64) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let max_rows = self.max_rows.unwrap_or(DEFAULT_MAX_ROWS);
        if max_rows == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "max_rows",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(AnalysisConfig {
            configuration: self
                .configuration
                .ok_or(ConfigError::MissingParameter("configuration"))?,
            max_rows,
        })
    }
}
