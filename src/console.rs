//! Terminal front end: reads yes/no answers and renders game events.

use crate::error::GameError;
use crate::game::{GameEvent, Narrator, Responder};
use crate::profile::ProfileRecord;
use crate::theme as t;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Printed when the player aborts a game.
pub const GOODBYE: &str = "Game interrupted. Goodbye!";

const REPROMPT: &str = "Please answer with 'yes' or 'no'";
const NO_NEW_INFORMATION: &str =
    "That question didn't help narrow things down - all remaining people match that answer.";
const STRONG_GUESS: &str =
    "I have a strong guess, but let me ask a few more questions to be sure...";

const AFFIRMATIVE: &[&str] = &["yes", "y", "true", "1"];
const NEGATIVE: &[&str] = &["no", "n", "false", "0"];

/// Interpret a typed answer. Surrounding whitespace and case are ignored.
pub fn parse_answer(input: &str) -> Option<bool> {
    let answer = input.trim().to_lowercase();
    if AFFIRMATIVE.contains(&answer.as_str()) {
        Some(true)
    } else if NEGATIVE.contains(&answer.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Line-oriented console over any reader/writer pair.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Print the numbered list of playable profiles.
    pub fn print_roster(&mut self, profiles: &[ProfileRecord]) -> io::Result<()> {
        writeln!(
            self.output,
            "Loaded {} profiles:",
            t::info(&profiles.len().to_string())
        )?;
        for (i, profile) in profiles.iter().enumerate() {
            match profile.distinct_search_name() {
                Some(search) => writeln!(
                    self.output,
                    "  {}. {} {}",
                    i + 1,
                    profile.display_name(),
                    t::muted(&format!("(searched as: {search})"))
                )?,
                None => writeln!(self.output, "  {}. {}", i + 1, profile.display_name())?,
            }
        }
        Ok(())
    }

    fn print_summary(
        &mut self,
        profile: &ProfileRecord,
        experiences_shown: usize,
    ) -> io::Result<()> {
        let name = profile.display_name();
        writeln!(self.output)?;
        writeln!(self.output, "Here's what I know about {name}:")?;
        writeln!(
            self.output,
            "{}",
            t::label_value(
                "LinkedIn",
                profile.linkedin_url.as_deref().unwrap_or("Unknown")
            )
        )?;

        if !profile.education.is_empty() {
            writeln!(self.output, "{}", t::bold("Education:"))?;
            for edu in &profile.education {
                let major = edu.major.as_deref().unwrap_or("Unknown major");
                match edu.minor.as_deref().map(str::trim) {
                    Some(minor) if !minor.is_empty() => {
                        writeln!(self.output, "  - {major} (Minor: {minor})")?
                    }
                    _ => writeln!(self.output, "  - {major}")?,
                }
            }
        }

        if !profile.experiences.is_empty() {
            writeln!(self.output, "{}", t::bold("Experience:"))?;
            for exp in profile.experiences.iter().take(experiences_shown) {
                writeln!(
                    self.output,
                    "  - {} at {}",
                    exp.role.as_deref().unwrap_or("Unknown role"),
                    exp.company.as_deref().unwrap_or("Unknown company")
                )?;
            }
        }

        writeln!(self.output)
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::Intro {
                profiles,
                max_questions,
            } => {
                writeln!(out)?;
                writeln!(out, "{}", t::header_box("🎯 Profile Guessing Game"))?;
                writeln!(
                    out,
                    "Think of one person from the {profiles} profiles I have."
                )?;
                write!(
                    out,
                    "I'll ask {max_questions} yes/no questions about work experience "
                )?;
                writeln!(out, "to figure out who you're thinking of.")?;
                writeln!(out)
            }
            GameEvent::Question {
                number,
                max_questions,
                ..
            } => {
                writeln!(out)?;
                let title = format!("Question {number}/{max_questions}:");
                writeln!(out, "{}", t::heading(&title))
            }
            GameEvent::Contradiction => {
                writeln!(
                    out,
                    "{}",
                    t::icon_warn("That answer doesn't make sense based on your previous answers!")
                )?;
                writeln!(out, "Your answers seem to contradict each other.")?;
                writeln!(
                    out,
                    "Let me reset and we can start over, or you might have made a mistake."
                )?;
                writeln!(out, "{}", t::muted("Starting fresh with all profiles..."))
            }
            GameEvent::NoNewInformation => writeln!(out, "{}", t::icon_muted(NO_NEW_INFORMATION)),
            GameEvent::Progress { remaining, names } => {
                writeln!(
                    out,
                    "{}",
                    t::label_value("Remaining possibilities", &remaining.to_string())
                )?;
                match names {
                    Some(names) if !names.is_empty() => {
                        writeln!(out, "{}", t::label_value("Could be", &names.join(", ")))
                    }
                    _ => Ok(()),
                }
            }
            GameEvent::StrongGuess => writeln!(out, "{}", t::muted(STRONG_GUESS)),
            GameEvent::OutOfQuestions => {
                writeln!(out, "{}", t::warn("I'm out of good questions to ask!"))
            }
            GameEvent::Finished { asked } => {
                writeln!(out)?;
                writeln!(out, "--- Finished asking {asked} questions ---")
            }
            GameEvent::Identified {
                profile,
                experiences_shown,
            } => {
                writeln!(out)?;
                writeln!(
                    out,
                    "{} {}",
                    t::icon_ok("I think you're thinking of:"),
                    t::bold(profile.display_name())
                )?;
                self.print_summary(profile, *experiences_shown)
            }
            GameEvent::NoMatch => {
                writeln!(out)?;
                writeln!(
                    out,
                    "{}",
                    t::icon_warn("Hmm, I couldn't find anyone matching your answers.")
                )?;
                writeln!(
                    out,
                    "Maybe there's an error in my data or I asked the wrong questions."
                )
            }
            GameEvent::Candidates { asked, names } => {
                writeln!(out)?;
                writeln!(
                    out,
                    "{}",
                    t::icon_warn(&format!(
                        "After {asked} questions, I couldn't narrow it down to one person."
                    ))
                )?;
                writeln!(out, "Could be any of these {} people:", names.len())?;
                for name in names {
                    writeln!(out, "  - {name}")?;
                }
                Ok(())
            }
            GameEvent::RandomGuess { name } => {
                writeln!(out)?;
                writeln!(out, "🎲 I'll guess: {}", t::bold(name))
            }
            GameEvent::GuessResult { correct, lucky } => {
                let line = match (correct, lucky) {
                    (true, false) => t::icon_ok("Yay! I guessed right!"),
                    (true, true) => t::icon_ok("Lucky guess! I got it right!"),
                    (false, false) => t::icon_fail("Oops! I was wrong. Good game though!"),
                    (false, true) => t::icon_fail("Oops! Better luck next time!"),
                };
                writeln!(out, "{line}")
            }
        }
    }
}

impl<I: BufRead, O: Write> Responder for Console<I, O> {
    fn confirm(&mut self, question: &str) -> Result<bool, GameError> {
        loop {
            write!(
                self.output,
                "{} {} ",
                t::accent(question),
                t::muted("(yes/no):")
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed while waiting for an answer");
                return Err(GameError::Interrupted);
            }

            match parse_answer(&line) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "{}", t::warn(REPROMPT))?,
            }
        }
    }
}

impl<I: BufRead, O: Write> Narrator for Console<I, O> {
    fn event(&mut self, event: &GameEvent) -> Result<(), GameError> {
        self.render(event)?;
        Ok(())
    }
}
