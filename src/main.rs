use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use profile_guesser::args::{CommonArgs, PlayArgs};
use profile_guesser::config::Config;
use profile_guesser::console::{Console, GOODBYE};
use profile_guesser::logging::{self, LogConfig};
use profile_guesser::theme as t;
use profile_guesser::{
    ConfigError, DataLoadError, GameError, NoValidDataError, ProfileStore, load_profiles, run_game,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

// ── Exit codes (sysexits.h) ─────────────────────────────────────────────────

const EX_FAILURE: u8 = 1;
const EX_DATAERR: u8 = 65;
const EX_NOINPUT: u8 = 66;
const EX_CONFIG: u8 = 78;

// ── CLI ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "profile-guesser",
    version,
    about = "Profile Guesser: guess who you're thinking of from scraped profile data"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Play the guessing game (default when no subcommand is given)
    Play(PlayArgs),
    /// List the playable profiles in the data file
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    t::init_color(cli.common.no_color);
    logging::init(if cli.common.verbose {
        LogConfig::debug()
    } else {
        LogConfig::from_env()
    });

    if let Err(err) = ctrlc::set_handler(|| {
        println!("\n\n{GOODBYE}");
        std::process::exit(0);
    }) {
        warn!(%err, "Could not install Ctrl-C handler");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.common.config.as_deref())?;
    cli.common.apply_overrides(&mut config);

    let play = match cli.command {
        Some(Commands::List) => return list(&config),
        Some(Commands::Play(args)) => args,
        None => PlayArgs::default(),
    };
    play.apply_overrides(&mut config);

    let store = load_store(&config)?;
    let mut narration = Console::new(io::empty(), io::stdout());
    narration
        .print_roster(store.all())
        .context("failed to print the profile list")?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?config.seed, data = %config.data_file.display(), "Starting game");

    let mut answers = Console::stdio();
    run_game(
        store,
        config.game_options(),
        rng,
        &mut answers,
        &mut narration,
    )?;
    Ok(())
}

fn list(config: &Config) -> Result<()> {
    let store = load_store(config)?;
    Console::new(io::empty(), io::stdout())
        .print_roster(store.all())
        .context("failed to print the profile list")?;
    Ok(())
}

fn load_store(config: &Config) -> Result<ProfileStore> {
    let records = load_profiles(&config.data_file)?;
    Ok(ProfileStore::new(records)?)
}

/// Print a diagnostic for `err` and pick the exit code.
fn report(err: anyhow::Error) -> ExitCode {
    if let Some(GameError::Interrupted) = err.downcast_ref::<GameError>() {
        println!("\n\n{GOODBYE}");
        return ExitCode::SUCCESS;
    }

    eprintln!("{}", t::icon_fail(&t::error(&format!("Error: {err:#}"))));

    let code = if let Some(load) = err.downcast_ref::<DataLoadError>() {
        match load {
            DataLoadError::Missing { .. } => {
                eprintln!(
                    "{}",
                    t::muted("Run the scraper first so it can write the profile data file.")
                );
                EX_NOINPUT
            }
            DataLoadError::Unreadable { .. } => EX_NOINPUT,
            DataLoadError::Malformed { .. } | DataLoadError::NotAList { .. } => EX_DATAERR,
        }
    } else if err.downcast_ref::<NoValidDataError>().is_some() {
        EX_DATAERR
    } else if err.downcast_ref::<ConfigError>().is_some() {
        EX_CONFIG
    } else {
        EX_FAILURE
    };
    ExitCode::from(code)
}
