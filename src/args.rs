use crate::config::Config;
use clap::{ArgAction, Args};
use std::path::PathBuf;

// Global flags shared across every subcommand.
//
//   -c / --config   Path to a config.toml file
//   -d / --data     Profile data file written by the scraper
//   --no-color      Disable coloured terminal output
//   -v / --verbose  Debug logging on stderr
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to a config.toml file
    #[arg(
        short = 'c',
        long,
        value_name = "PATH",
        env = "PROFILE_GUESSER_CONFIG",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Profile data file (JSON list written by the scraper)
    #[arg(
        short = 'd',
        long = "data",
        value_name = "PATH",
        env = "PROFILE_GUESSER_DATA",
        global = true
    )]
    pub data_file: Option<PathBuf>,

    /// Disable coloured terminal output
    #[arg(long = "no-color", action = ArgAction::SetTrue, env = "NO_COLOR", global = true)]
    pub no_color: bool,

    /// Debug logging on stderr
    #[arg(short, long, action = ArgAction::SetTrue, global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
    }
}

/// Options for the `play` subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct PlayArgs {
    /// Seed the random source for a reproducible game
    #[arg(long, value_name = "N", env = "PROFILE_GUESSER_SEED")]
    pub seed: Option<u64>,

    /// Number of questions to ask
    #[arg(short = 'q', long = "questions", value_name = "N")]
    pub max_questions: Option<usize>,
}

impl PlayArgs {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_questions) = self.max_questions {
            config.max_questions = max_questions;
        }
    }
}
