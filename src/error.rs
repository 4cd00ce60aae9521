//! Error types shared by the loader, the store and the game loop.

use std::path::PathBuf;
use thiserror::Error;

/// The profile data file could not be turned into a list of records.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("{} not found", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} should contain a list of profiles", path.display())]
    NotAList { path: PathBuf },
}

impl DataLoadError {
    /// Path of the data file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Missing { path }
            | Self::Unreadable { path, .. }
            | Self::Malformed { path, .. }
            | Self::NotAList { path } => path,
        }
    }
}

/// Every loaded record was a failed scrape, or there were none at all.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no valid profiles found ({total} records loaded, none usable)")]
pub struct NoValidDataError {
    pub total: usize,
}

/// Failures while a game is in progress.
#[derive(Debug, Error)]
pub enum GameError {
    /// The player aborted while a question was pending.
    #[error("game interrupted")]
    Interrupted,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration file problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
