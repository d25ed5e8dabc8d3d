use chrono::{DateTime, Duration, Utc};

use crate::matching::answers_match;
use crate::model::game::AnswerField;
use crate::model::ids::QuestionId;
use crate::model::lesson::WordPair;
use crate::time::elapsed_between;

/// Marker substituted into fill-in-the-blank templates.
pub const BLANK_MARKER: &str = "___";

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// A player's response to the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed or selected text.
    Text(String),
    /// A true/false judgment.
    Judgment(bool),
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Self::Judgment(value)
    }
}

//
// ─── TYPING TIMING ─────────────────────────────────────────────────────────────
//

/// When the presentation layer started and finished showing a typing word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordTiming {
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl WordTiming {
    /// Time spent on this word, once both ends are recorded.
    #[must_use]
    pub fn time_spent(&self) -> Option<Duration> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some(elapsed_between(start, end)),
            _ => None,
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Game-specific shape of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Quiz and listening: pick `correct_answer` from `options`. Listening
    /// hosts voice `correct_answer` instead of showing the prompt.
    Choice { options: Vec<String> },
    /// Cloze sentence with a blank at `blank_position` (a char index).
    FillBlank {
        sentence: String,
        blank_position: usize,
        options: Vec<String>,
    },
    /// Judge whether `displayed_translation` belongs to `displayed_word`.
    TrueFalse {
        displayed_word: String,
        displayed_translation: String,
        is_true: bool,
        correct_translation: String,
    },
    /// Free typing in the session's direction.
    Typing { timing: WordTiming },
    /// Rebuild `original_word` from `scrambled_word`.
    Scramble {
        scrambled_word: String,
        original_word: String,
        hints_revealed: usize,
    },
}

/// One exercise generated from a word pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub word: WordPair,
    pub correct_answer: String,
    /// Side of the word pair `correct_answer` is written in; selects the
    /// equality rule.
    pub answer_field: AnswerField,
    pub kind: QuestionKind,
}

impl Question {
    /// Options for choice-based questions.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::Choice { options } | QuestionKind::FillBlank { options, .. } => {
                Some(options)
            }
            _ => None,
        }
    }

    /// Prompt the player sees for this question.
    #[must_use]
    pub fn prompt(&self) -> &str {
        match &self.kind {
            QuestionKind::FillBlank { sentence, .. } => sentence.as_str(),
            QuestionKind::TrueFalse { displayed_word, .. } => displayed_word.as_str(),
            QuestionKind::Scramble { scrambled_word, .. } => scrambled_word.as_str(),
            QuestionKind::Choice { .. } | QuestionKind::Typing { .. } => {
                self.answer_field.opposite().of(&self.word)
            }
        }
    }

    /// Checks `answer` against this question.
    ///
    /// Returns `None` when the answer kind does not fit the question (text for a
    /// true/false question, or a judgment for anything else).
    #[must_use]
    pub fn check(&self, answer: &Answer) -> Option<bool> {
        match (&self.kind, answer) {
            (QuestionKind::TrueFalse { is_true, .. }, Answer::Judgment(judged)) => {
                Some(judged == is_true)
            }
            (QuestionKind::TrueFalse { .. }, Answer::Text(_)) | (_, Answer::Judgment(_)) => None,
            (_, Answer::Text(given)) => Some(answers_match(
                self.answer_field,
                &self.correct_answer,
                given,
            )),
        }
    }
}
