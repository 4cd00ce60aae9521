// ── profile-guesser ─────────────────────────────────────────────────────────
//
// Loads scraped profile records and narrows down the person a player is
// thinking of with a handful of yes/no questions about their work history.

pub mod args;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod logging;
pub mod profile;
pub mod question;
pub mod store;
pub mod theme;

pub use error::{ConfigError, DataLoadError, GameError, NoValidDataError};
pub use game::{GameOptions, GameReport, GameSession, Verdict, run_game};
pub use profile::{EducationEntry, ExperienceEntry, ProfileRecord, load_profiles};
pub use question::{Question, choose_next_question};
pub use store::{Field, ProfileStore};
