//! The question loop: ask, filter, recover from contradictions, then guess.
//!
//! A session always runs to its question budget (or until no useful question
//! is left). Narrowing down to a single candidate early does not end the game;
//! the verdict is only decided once the loop is over.

mod events;
mod interact;

pub use events::{GameEvent, GameReport, TurnOutcome, Verdict};
pub use interact::{Narrator, RecordingNarrator, Responder, ScriptedResponder, SilentNarrator};

use crate::error::GameError;
use crate::profile::ProfileRecord;
use crate::question::{Question, choose_next_question};
use crate::store::ProfileStore;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

/// Default number of questions per session.
pub const DEFAULT_MAX_QUESTIONS: usize = 5;
/// Candidate count at or below which names are listed and a random guess is made.
pub const DEFAULT_GUESS_THRESHOLD: usize = 3;
/// Experience entries shown in the summary of an identified person.
pub const DEFAULT_SUMMARY_EXPERIENCES: usize = 3;

/// Confirmation prompt after a guess.
pub const CONFIRM_PROMPT: &str = "Did I guess correctly?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub max_questions: usize,
    pub guess_threshold: usize,
    pub summary_experiences: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
            guess_threshold: DEFAULT_GUESS_THRESHOLD,
            summary_experiences: DEFAULT_SUMMARY_EXPERIENCES,
        }
    }
}

/// Working state of one play-through.
pub struct GameSession<R> {
    store: ProfileStore,
    options: GameOptions,
    rng: R,
    questions_asked: usize,
}

impl<R: Rng> GameSession<R> {
    pub fn new(store: ProfileStore, options: GameOptions, rng: R) -> Self {
        Self {
            store,
            options,
            rng,
            questions_asked: 0,
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn questions_asked(&self) -> usize {
        self.questions_asked
    }

    pub fn budget_exhausted(&self) -> bool {
        self.questions_asked >= self.options.max_questions
    }

    /// Next question to ask, or `None` when the budget is spent or nothing
    /// useful is left to ask.
    pub fn next_question(&mut self) -> Option<Question> {
        if self.budget_exhausted() {
            return None;
        }
        choose_next_question(&self.store, &mut self.rng)
    }

    /// Apply the player's answer to `question` and count the turn.
    pub fn apply_answer(&mut self, question: &Question, answer: bool) -> TurnOutcome {
        self.questions_asked += 1;
        let before = self.store.remaining_count();
        self.store
            .apply_filter(answer, question.field, &question.keyword);
        let after = self.store.remaining_count();

        if after == 0 && before > 0 {
            info!(
                field = %question.field,
                keyword = question.keyword.as_str(),
                "Answers contradict each other, restoring all profiles"
            );
            self.store.reset_to_baseline();
            TurnOutcome::Contradiction
        } else if after == before && before > 1 {
            TurnOutcome::NoNewInformation
        } else {
            TurnOutcome::Narrowed
        }
    }

    /// Run the whole game against `responder`, reporting to `narrator`.
    #[instrument(skip_all, fields(profiles = self.store.all().len()))]
    pub fn play(
        &mut self,
        responder: &mut dyn Responder,
        narrator: &mut dyn Narrator,
    ) -> Result<GameReport, GameError> {
        narrator.event(&GameEvent::Intro {
            profiles: self.store.all().len(),
            max_questions: self.options.max_questions,
        })?;

        while !self.budget_exhausted() {
            let Some(question) = self.next_question() else {
                narrator.event(&GameEvent::OutOfQuestions)?;
                break;
            };

            narrator.event(&GameEvent::Question {
                number: self.questions_asked + 1,
                max_questions: self.options.max_questions,
                question: question.clone(),
            })?;
            let answer = responder.confirm(&question.text)?;
            debug!(question = question.text.as_str(), answer, "Received answer");

            match self.apply_answer(&question, answer) {
                TurnOutcome::Contradiction => narrator.event(&GameEvent::Contradiction)?,
                TurnOutcome::NoNewInformation => narrator.event(&GameEvent::NoNewInformation)?,
                TurnOutcome::Narrowed => {}
            }

            let remaining = self.store.remaining_count();
            let names = if remaining <= self.options.guess_threshold {
                Some(self.store.remaining_names())
            } else {
                None
            };
            narrator.event(&GameEvent::Progress { remaining, names })?;

            if remaining == 1 {
                narrator.event(&GameEvent::StrongGuess)?;
            }
        }

        narrator.event(&GameEvent::Finished {
            asked: self.questions_asked,
        })?;

        let verdict = self.decide(responder, narrator)?;
        info!(asked = self.questions_asked, ?verdict, "Game finished");
        Ok(GameReport {
            questions_asked: self.questions_asked,
            verdict,
        })
    }

    fn decide(
        &mut self,
        responder: &mut dyn Responder,
        narrator: &mut dyn Narrator,
    ) -> Result<Verdict, GameError> {
        let remaining: Vec<&ProfileRecord> = self.store.remaining().collect();

        let (candidates, guess) = match remaining.as_slice() {
            [] => {
                narrator.event(&GameEvent::NoMatch)?;
                return Ok(Verdict::NoMatch);
            }
            [only] => {
                let profile = ProfileRecord::clone(only);
                narrator.event(&GameEvent::Identified {
                    profile: profile.clone(),
                    experiences_shown: self.options.summary_experiences,
                })?;
                let confirmed = responder.confirm(CONFIRM_PROMPT)?;
                narrator.event(&GameEvent::GuessResult {
                    correct: confirmed,
                    lucky: false,
                })?;
                return Ok(Verdict::Identified { profile, confirmed });
            }
            many => {
                let candidates: Vec<String> = many
                    .iter()
                    .map(|profile| profile.display_name().to_string())
                    .collect();
                narrator.event(&GameEvent::Candidates {
                    asked: self.questions_asked,
                    names: candidates.clone(),
                })?;

                if many.len() > self.options.guess_threshold {
                    return Ok(Verdict::Undecided { candidates });
                }
                match many.choose(&mut self.rng) {
                    Some(&guess) => (candidates, guess.clone()),
                    None => return Ok(Verdict::Undecided { candidates }),
                }
            }
        };

        narrator.event(&GameEvent::RandomGuess {
            name: guess.display_name().to_string(),
        })?;
        let confirmed = responder.confirm(CONFIRM_PROMPT)?;
        narrator.event(&GameEvent::GuessResult {
            correct: confirmed,
            lucky: true,
        })?;
        Ok(Verdict::BestEffort {
            candidates,
            guess,
            confirmed,
        })
    }
}

/// Play one game over an already-validated profile set.
pub fn run_game<R: Rng>(
    store: ProfileStore,
    options: GameOptions,
    rng: R,
    responder: &mut dyn Responder,
    narrator: &mut dyn Narrator,
) -> Result<GameReport, GameError> {
    GameSession::new(store, options, rng).play(responder, narrator)
}
