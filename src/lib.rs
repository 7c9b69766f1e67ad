//! Quarterback passing statistics extraction
//!
//! Scrapes the pro-football-reference passing table for a configured set of
//! seasons and writes the rows to a delimited flat file, each tagged with a
//! playoff qualification flag. Single-shot batch tool: it runs the seasons
//! in order and terminates.

pub mod driver;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod playoffs;
pub mod sink;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-wide errors
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Fetch failed for season {season}: {message}")]
    Fetch { season: String, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sink write failed: {0}")]
    Sink(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Seasons to extract, processed in this order
    pub seasons: Vec<String>,
    /// Maximum accepted records per season
    pub row_budget: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scrape: ScrapeConfig {
                seasons: vec![
                    "2022".to_string(),
                    "2021".to_string(),
                    "2020".to_string(),
                ],
                row_budget: 34,
            },
            output: OutputConfig {
                path: "qb_data.csv".to_string(),
                delimiter: ',',
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScrapeError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| ScrapeError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScrapeError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject configurations the source page cannot serve.
    pub fn validate(&self) -> Result<()> {
        if self.scrape.seasons.is_empty() {
            return Err(ScrapeError::Config("No seasons configured".to_string()));
        }
        let season_token = Regex::new(r"^\d{4}$").unwrap();
        for season in &self.scrape.seasons {
            if !season_token.is_match(season) {
                return Err(ScrapeError::Config(format!(
                    "Invalid season {:?}: expected a four-digit year",
                    season
                )));
            }
        }
        if self.scrape.row_budget == 0 {
            return Err(ScrapeError::Config(
                "Row budget must be at least 1".to_string(),
            ));
        }
        if !self.output.delimiter.is_ascii() {
            return Err(ScrapeError::Config(
                "Delimiter must be an ASCII character".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_run() {
        let config = Config::default();
        assert_eq!(config.scrape.seasons, ["2022", "2021", "2020"]);
        assert_eq!(config.scrape.row_budget, 34);
        assert_eq!(config.output.path, "qb_data.csv");
        assert_eq!(config.output.delimiter, ',');
        config.validate().unwrap();
    }

    #[test]
    fn non_year_season_is_rejected() {
        let mut config = Config::default();
        config.scrape.seasons = vec!["20x2".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_season_list_is_rejected() {
        let mut config = Config::default();
        config.scrape.seasons.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_row_budget_is_rejected() {
        let mut config = Config::default();
        config.scrape.row_budget = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_parses_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [scrape]
            seasons = ["2019"]
            row_budget = 10

            [output]
            path = "out.tsv"
            delimiter = "\t"
            "#,
        )
        .unwrap();
        assert_eq!(config.scrape.seasons, ["2019"]);
        assert_eq!(config.scrape.row_budget, 10);
        assert_eq!(config.output.delimiter, '\t');
        config.validate().unwrap();
    }
}
