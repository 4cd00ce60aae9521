use crate::profile::ProfileRecord;
use crate::question::Question;

/// What happened to the candidate set after one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The candidate set shrank (or there was nothing to split).
    Narrowed,
    /// Every remaining candidate gave the same answer.
    NoNewInformation,
    /// The answer eliminated everyone; the baseline was restored.
    Contradiction,
}

/// Something the player should be told about.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Intro {
        profiles: usize,
        max_questions: usize,
    },
    /// Emitted right before the question is put to the responder.
    Question {
        number: usize,
        max_questions: usize,
        question: Question,
    },
    Contradiction,
    NoNewInformation,
    Progress {
        remaining: usize,
        /// Present when few enough candidates are left to name them.
        names: Option<Vec<String>>,
    },
    StrongGuess,
    OutOfQuestions,
    Finished {
        asked: usize,
    },
    Identified {
        profile: ProfileRecord,
        /// How many experience entries to include in the summary.
        experiences_shown: usize,
    },
    NoMatch,
    Candidates {
        asked: usize,
        names: Vec<String>,
    },
    RandomGuess {
        name: String,
    },
    GuessResult {
        correct: bool,
        /// True when the guess was a random pick among several candidates.
        lucky: bool,
    },
}

/// Final result of a play-through.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Exactly one candidate was left.
    Identified {
        profile: ProfileRecord,
        confirmed: bool,
    },
    /// Nobody matched the answers.
    NoMatch,
    /// A few candidates were left and one was picked at random.
    BestEffort {
        candidates: Vec<String>,
        guess: ProfileRecord,
        confirmed: bool,
    },
    /// Too many candidates were left to guess.
    Undecided { candidates: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameReport {
    pub questions_asked: usize,
    pub verdict: Verdict,
}
