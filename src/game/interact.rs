// ── Player-facing seams ─────────────────────────────────────────────────────
//
// The game loop never touches stdin/stdout directly. It asks questions through
// a `Responder` and reports progress through a `Narrator`; the terminal
// implementation lives in `crate::console`, the scripted ones below are used by
// tests and non-interactive callers.

use super::events::GameEvent;
use crate::error::GameError;
use std::collections::VecDeque;

/// Answers yes/no questions.
pub trait Responder {
    /// Block until the player answers `question`.
    fn confirm(&mut self, question: &str) -> Result<bool, GameError>;
}

/// Receives game events for display.
pub trait Narrator {
    fn event(&mut self, event: &GameEvent) -> Result<(), GameError>;
}

/// Replays a fixed list of answers and records every question it was asked.
///
/// Running out of answers behaves like the player walking away.
#[derive(Debug, Clone, Default)]
pub struct ScriptedResponder {
    answers: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedResponder {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn unused(&self) -> usize {
        self.answers.len()
    }
}

impl Responder for ScriptedResponder {
    fn confirm(&mut self, question: &str) -> Result<bool, GameError> {
        self.asked.push(question.to_string());
        self.answers.pop_front().ok_or(GameError::Interrupted)
    }
}

/// Collects events in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingNarrator {
    pub events: Vec<GameEvent>,
}

impl Narrator for RecordingNarrator {
    fn event(&mut self, event: &GameEvent) -> Result<(), GameError> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn event(&mut self, _event: &GameEvent) -> Result<(), GameError> {
        Ok(())
    }
}
