use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::lesson::WordPair;

/// Which side of a word pair an answer is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerField {
    Korean,
    English,
}

impl AnswerField {
    /// Reads this side from a word pair.
    #[must_use]
    pub fn of(self, word: &WordPair) -> &str {
        match self {
            AnswerField::Korean => &word.korean,
            AnswerField::English => &word.english,
        }
    }

    /// The opposite side, used as the prompt when this side is the answer.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            AnswerField::Korean => AnswerField::English,
            AnswerField::English => AnswerField::Korean,
        }
    }
}

/// Direction of a typing challenge, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerDirection {
    /// Korean prompt, English answer.
    #[default]
    KoreanToEnglish,
    /// English prompt, Korean answer.
    EnglishToKorean,
}

impl AnswerDirection {
    #[must_use]
    pub fn answer_field(self) -> AnswerField {
        match self {
            AnswerDirection::KoreanToEnglish => AnswerField::English,
            AnswerDirection::EnglishToKorean => AnswerField::Korean,
        }
    }
}

/// The six practice games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "kebab-case")]
pub enum GameKind {
    /// English prompt, pick the Korean word.
    Quiz,
    /// Korean word is voiced, pick it from Korean options.
    Listening,
    /// Cloze sentence, pick the Korean word for the blank.
    FillBlanks,
    /// Judge whether a displayed pairing is correct.
    TrueFalse,
    /// Type the translation in the configured direction.
    TypingChallenge { direction: AnswerDirection },
    /// Unscramble the Korean word.
    WordScramble,
}

impl GameKind {
    /// Side of the word pair that answers for this game are written in.
    ///
    /// True/false answers are judgments; the displayed side is English.
    #[must_use]
    pub fn answer_field(self) -> AnswerField {
        match self {
            GameKind::Quiz
            | GameKind::Listening
            | GameKind::FillBlanks
            | GameKind::WordScramble => AnswerField::Korean,
            GameKind::TrueFalse => AnswerField::English,
            GameKind::TypingChallenge { direction } => direction.answer_field(),
        }
    }

    /// Games whose questions carry an `options` list.
    #[must_use]
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            GameKind::Quiz | GameKind::Listening | GameKind::FillBlanks
        )
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameKind::Quiz => "quiz",
            GameKind::Listening => "listening",
            GameKind::FillBlanks => "fill-blanks",
            GameKind::TrueFalse => "true-false",
            GameKind::TypingChallenge { .. } => "typing-challenge",
            GameKind::WordScramble => "word-scramble",
        };
        f.write_str(name)
    }
}
