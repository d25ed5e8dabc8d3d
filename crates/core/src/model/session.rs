use chrono::{DateTime, Duration, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::game::GameKind;
use crate::model::ids::{LessonId, QuestionId, SessionId};
use crate::model::question::{Answer, Question, QuestionKind};
use crate::scoring::words_per_minute;
use crate::time::elapsed_between;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("lesson has no words to practice")]
    EmptyLesson,

    #[error("session already completed")]
    Completed,

    #[error("session is still in progress")]
    InProgress,

    #[error("answer does not fit a {game} question")]
    AnswerKindMismatch { game: GameKind },

    #[error("word timing is only tracked in typing challenges")]
    NotTimed,

    #[error("hints are only available in word scramble")]
    NoScramble,

    #[error("no more hints for the current word")]
    HintsExhausted,
}

//
// ─── GAME EXTRAS ───────────────────────────────────────────────────────────────
//

/// Counters that only some games keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExtras {
    None,
    Streak { streak: u32, max_streak: u32 },
    Typing { words_per_minute: Option<u32> },
    Scramble { hints: u32 },
}

impl SessionExtras {
    fn for_game(game: GameKind) -> Self {
        match game {
            GameKind::TrueFalse => Self::Streak {
                streak: 0,
                max_streak: 0,
            },
            GameKind::TypingChallenge { .. } => Self::Typing {
                words_per_minute: None,
            },
            GameKind::WordScramble => Self::Scramble { hints: 0 },
            GameKind::Quiz | GameKind::Listening | GameKind::FillBlanks => Self::None,
        }
    }
}

//
// ─── RECORDS & OUTCOMES ────────────────────────────────────────────────────────
//

/// One entry in the session's answer log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    /// `None` when the question was skipped with `advance`.
    pub given: Option<Answer>,
    pub is_correct: bool,
}

/// Result of submitting an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub session: Session,
}

/// Result of revealing a word-scramble hint.
#[derive(Debug, Clone, PartialEq)]
pub struct HintOutcome {
    /// Leading characters of the original word.
    pub hint: String,
    pub session: Session,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Progress record for one attempt at a practice game.
///
/// Sessions are values: every transition borrows the current session and
/// returns a new one, leaving the caller's copy untouched. A session is
/// completed exactly when every question has been answered or skipped.
#[derive(Clone, PartialEq)]
pub struct Session {
    id: SessionId,
    lesson_id: LessonId,
    game: GameKind,
    questions: Vec<Question>,
    current_index: usize,
    correct_answers: usize,
    incorrect_answers: usize,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    time_spent: Option<Duration>,
    extras: SessionExtras,
    answers: Vec<AnswerRecord>,
}

impl Session {
    /// Wraps generated questions in a fresh session.
    ///
    /// An empty question list produces a session that is already completed.
    #[must_use]
    pub fn new(
        id: SessionId,
        lesson_id: LessonId,
        game: GameKind,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let mut session = Self {
            id,
            lesson_id,
            game,
            questions,
            current_index: 0,
            correct_answers: 0,
            incorrect_answers: 0,
            started_at,
            completed_at: None,
            time_spent: None,
            extras: SessionExtras::for_game(game),
            answers: Vec::new(),
        };
        if session.questions.is_empty() {
            session.complete(started_at);
        }
        session
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson_id
    }

    #[must_use]
    pub fn game(&self) -> GameKind {
        self.game
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    #[must_use]
    pub fn incorrect_answers(&self) -> usize {
        self.incorrect_answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn time_spent(&self) -> Option<Duration> {
        self.time_spent
    }

    #[must_use]
    pub fn extras(&self) -> SessionExtras {
        self.extras
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.current_index == self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.current_index,
            remaining: self.questions.len() - self.current_index,
            is_complete: self.is_completed(),
        }
    }

    /// Current run of consecutive correct answers (true/false only).
    #[must_use]
    pub fn streak(&self) -> Option<u32> {
        match self.extras {
            SessionExtras::Streak { streak, .. } => Some(streak),
            _ => None,
        }
    }

    /// Longest run of consecutive correct answers (true/false only).
    #[must_use]
    pub fn max_streak(&self) -> Option<u32> {
        match self.extras {
            SessionExtras::Streak { max_streak, .. } => Some(max_streak),
            _ => None,
        }
    }

    /// Hints revealed so far (word scramble only).
    #[must_use]
    pub fn hints(&self) -> Option<u32> {
        match self.extras {
            SessionExtras::Scramble { hints } => Some(hints),
            _ => None,
        }
    }

    /// Final typing speed, set on completion (typing challenge only).
    #[must_use]
    pub fn words_per_minute(&self) -> Option<u32> {
        match self.extras {
            SessionExtras::Typing { words_per_minute } => words_per_minute,
            _ => None,
        }
    }

    /// Sum of the recorded per-word typing intervals.
    #[must_use]
    pub fn typing_time(&self) -> Duration {
        self.questions
            .iter()
            .filter_map(|q| match &q.kind {
                QuestionKind::Typing { timing } => timing.time_spent(),
                _ => None,
            })
            .fold(Duration::zero(), |acc, d| acc + d)
    }

    /// Typing speed over the words completed so far, right or wrong.
    #[must_use]
    pub fn live_words_per_minute(&self) -> u32 {
        words_per_minute(self.current_index, self.typing_time())
    }

    /// Checks `answer` against the current question and advances by one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if every question is already answered,
    /// and `SessionError::AnswerKindMismatch` if a text answer is given to a
    /// true/false question or a judgment to any other game.
    pub fn submit_answer(
        &self,
        answer: impl Into<Answer>,
        now: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        let question = self.current_question().ok_or(SessionError::Completed)?;
        let answer = answer.into();
        let is_correct = question
            .check(&answer)
            .ok_or(SessionError::AnswerKindMismatch { game: self.game })?;

        Ok(AnswerOutcome {
            is_correct,
            session: self.record(Some(answer), is_correct, now),
        })
    }

    /// Moves past the current question without answering it.
    ///
    /// A skipped question counts as incorrect and breaks the streak.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is finished.
    pub fn advance(&self, now: DateTime<Utc>) -> Result<Session, SessionError> {
        if self.is_completed() {
            return Err(SessionError::Completed);
        }
        Ok(self.record(None, false, now))
    }

    /// Stamps the moment the current typing word was shown.
    ///
    /// Calling it again restarts the word's interval.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is finished and
    /// `SessionError::NotTimed` for games other than the typing challenge.
    pub fn begin_word(&self, now: DateTime<Utc>) -> Result<Session, SessionError> {
        let question = self.current_question().ok_or(SessionError::Completed)?;
        if !matches!(question.kind, QuestionKind::Typing { .. }) {
            return Err(SessionError::NotTimed);
        }

        let mut next = self.clone();
        if let QuestionKind::Typing { timing } = &mut next.questions[self.current_index].kind {
            timing.started_at = Some(now);
            timing.ended_at = None;
        }
        Ok(next)
    }

    /// Reveals one more leading character of the current scrambled word.
    ///
    /// At most `len - 1` characters can be revealed per word.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is finished,
    /// `SessionError::NoScramble` for other games, and
    /// `SessionError::HintsExhausted` once the cap is reached.
    pub fn reveal_hint(&self) -> Result<HintOutcome, SessionError> {
        let question = self.current_question().ok_or(SessionError::Completed)?;
        let QuestionKind::Scramble {
            original_word,
            hints_revealed,
            ..
        } = &question.kind
        else {
            return Err(SessionError::NoScramble);
        };

        let revealed = hints_revealed + 1;
        if revealed >= original_word.chars().count() {
            return Err(SessionError::HintsExhausted);
        }
        let hint: String = original_word.chars().take(revealed).collect();

        let mut next = self.clone();
        if let QuestionKind::Scramble { hints_revealed, .. } =
            &mut next.questions[self.current_index].kind
        {
            *hints_revealed = revealed;
        }
        if let SessionExtras::Scramble { hints } = &mut next.extras {
            *hints += 1;
        }
        Ok(HintOutcome {
            hint,
            session: next,
        })
    }

    fn record(&self, given: Option<Answer>, is_correct: bool, now: DateTime<Utc>) -> Session {
        let mut next = self.clone();
        let index = next.current_index;
        let previous_end = index
            .checked_sub(1)
            .and_then(|i| match &self.questions[i].kind {
                QuestionKind::Typing { timing } => timing.ended_at,
                _ => None,
            })
            .unwrap_or(self.started_at);

        let question = &mut next.questions[index];
        if let QuestionKind::Typing { timing } = &mut question.kind {
            timing.started_at.get_or_insert(previous_end);
            timing.ended_at = Some(now);
        }
        next.answers.push(AnswerRecord {
            question_id: question.id,
            given,
            is_correct,
        });

        if is_correct {
            next.correct_answers += 1;
        } else {
            next.incorrect_answers += 1;
        }
        if let SessionExtras::Streak { streak, max_streak } = &mut next.extras {
            if is_correct {
                *streak += 1;
                *max_streak = (*max_streak).max(*streak);
            } else {
                *streak = 0;
            }
        }

        next.current_index += 1;
        if next.is_completed() {
            next.complete(now);
        }
        next.debug_check_invariants();
        next
    }

    fn complete(&mut self, now: DateTime<Utc>) {
        self.completed_at = Some(now);
        self.time_spent = Some(elapsed_between(self.started_at, now));
        let wpm = self.live_words_per_minute();
        if let SessionExtras::Typing { words_per_minute } = &mut self.extras {
            *words_per_minute = Some(wpm);
        }
    }

    fn debug_check_invariants(&self) {
        debug_assert!(self.current_index <= self.questions.len());
        debug_assert_eq!(
            self.correct_answers + self.incorrect_answers,
            self.current_index
        );
        debug_assert_eq!(self.answers.len(), self.current_index);
        debug_assert_eq!(self.completed_at.is_some(), self.is_completed());
        debug_assert_eq!(self.time_spent.is_some(), self.is_completed());
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("lesson_id", &self.lesson_id)
            .field("game", &self.game)
            .field("questions_len", &self.questions.len())
            .field("current_index", &self.current_index)
            .field("correct_answers", &self.correct_answers)
            .field("incorrect_answers", &self.incorrect_answers)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .field("extras", &self.extras)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
