use crate::error::ConfigError;
use crate::game::{
    DEFAULT_GUESS_THRESHOLD, DEFAULT_MAX_QUESTIONS, DEFAULT_SUMMARY_EXPERIENCES, GameOptions,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the data file the scraper writes.
pub const DEFAULT_DATA_FILE: &str = "options.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scraped profile data (a JSON list of records)
    pub data_file: PathBuf,
    /// Questions per game
    pub max_questions: usize,
    /// Candidate count at or below which names are listed and a guess is made
    pub guess_threshold: usize,
    /// Experience entries shown when a person is identified
    pub summary_experiences: usize,
    /// Fixed seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            max_questions: DEFAULT_MAX_QUESTIONS,
            guess_threshold: DEFAULT_GUESS_THRESHOLD,
            summary_experiences: DEFAULT_SUMMARY_EXPERIENCES,
            seed: None,
        }
    }
}

impl Config {
    /// `~/.profile-guesser/config.toml`
    pub fn default_path() -> PathBuf {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home_dir.join(".profile-guesser").join("config.toml")
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicitly given file must exist; a missing default file yields the
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !explicit && !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            max_questions: self.max_questions,
            guess_threshold: self.guess_threshold,
            summary_experiences: self.summary_experiences,
        }
    }
}
