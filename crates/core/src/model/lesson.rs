use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{LessonId, WordId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson name cannot be empty")]
    EmptyName,

    #[error("word {id} has an empty korean or english field")]
    EmptyWordField { id: WordId },

    #[error("word id {id} appears more than once")]
    DuplicateWordId { id: WordId },
}

//
// ─── WORD PAIR ─────────────────────────────────────────────────────────────────
//

/// A single Korean/English vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub id: WordId,
    pub korean: String,
    pub english: String,
}

impl WordPair {
    #[must_use]
    pub fn new(id: impl Into<String>, korean: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            id: WordId::new(id),
            korean: korean.into(),
            english: english.into(),
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A named, ordered collection of word pairs.
///
/// Lessons are owned by the external store; sessions take a snapshot of the
/// words at creation time and never write back.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    id: LessonId,
    name: String,
    words: Vec<WordPair>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Lesson {
    /// Creates a lesson from store-provided data.
    ///
    /// The word list may be empty; session creation rejects empty lessons, not
    /// the lesson itself.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyName` if the name is blank,
    /// `LessonError::EmptyWordField` if a word has a blank side, and
    /// `LessonError::DuplicateWordId` if two words share an id.
    pub fn new(
        id: LessonId,
        name: impl Into<String>,
        words: Vec<WordPair>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, LessonError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LessonError::EmptyName);
        }

        let mut seen = HashSet::with_capacity(words.len());
        for word in &words {
            if word.korean.trim().is_empty() || word.english.trim().is_empty() {
                return Err(LessonError::EmptyWordField {
                    id: word.id.clone(),
                });
            }
            if !seen.insert(&word.id) {
                return Err(LessonError::DuplicateWordId {
                    id: word.id.clone(),
                });
            }
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            words,
            created_at,
            updated_at,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn words(&self) -> &[WordPair] {
        &self.words
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn lesson_with(words: Vec<WordPair>) -> Result<Lesson, LessonError> {
        Lesson::new(LessonId::new("l1"), "Greetings", words, fixed_now(), fixed_now())
    }

    #[test]
    fn lesson_new_rejects_empty_name() {
        let err = Lesson::new(LessonId::new("l1"), "   ", Vec::new(), fixed_now(), fixed_now())
            .unwrap_err();
        assert_eq!(err, LessonError::EmptyName);
    }

    #[test]
    fn lesson_trims_name() {
        let lesson = Lesson::new(
            LessonId::new("l1"),
            "  Food  ",
            Vec::new(),
            fixed_now(),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(lesson.name(), "Food");
        assert!(lesson.is_empty());
    }

    #[test]
    fn lesson_rejects_blank_word_side() {
        let err = lesson_with(vec![WordPair::new("w1", "안녕", " ")]).unwrap_err();
        assert_eq!(
            err,
            LessonError::EmptyWordField {
                id: WordId::new("w1")
            }
        );
    }

    #[test]
    fn lesson_rejects_duplicate_ids() {
        let err = lesson_with(vec![
            WordPair::new("w1", "안녕", "hello"),
            WordPair::new("w1", "감사", "thanks"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            LessonError::DuplicateWordId {
                id: WordId::new("w1")
            }
        );
    }

    #[test]
    fn lesson_keeps_word_order() {
        let lesson = lesson_with(vec![
            WordPair::new("w1", "하나", "one"),
            WordPair::new("w2", "둘", "two"),
        ])
        .unwrap();
        let ids: Vec<_> = lesson.words().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["w1", "w2"]);
    }
}
