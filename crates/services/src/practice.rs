use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use drill_core::Clock;
use drill_core::model::{
    Answer, AnswerOutcome, GameKind, HintOutcome, Lesson, Session, SessionError,
};
use drill_core::scoring::{SessionStats, session_stats};
use drill_core::settings::PracticeSettings;

use crate::error::PracticeError;
use crate::questions;
use crate::sampling::session_id;

/// Runs practice sessions over lessons supplied by the caller.
///
/// The service owns the random source and the clock; sessions themselves stay
/// plain values, so callers keep whichever snapshot they were handed.
#[derive(Debug, Clone)]
pub struct PracticeService<R = StdRng> {
    clock: Clock,
    rng: R,
    settings: PracticeSettings,
}

impl PracticeService<StdRng> {
    /// Service seeded from the operating system's entropy.
    #[must_use]
    pub fn from_os_rng(clock: Clock) -> Self {
        Self::new(clock, StdRng::from_os_rng())
    }

    /// Service whose question generation is fully reproducible.
    #[must_use]
    pub fn seeded(clock: Clock, seed: u64) -> Self {
        Self::new(clock, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PracticeService<R> {
    #[must_use]
    pub fn new(clock: Clock, rng: R) -> Self {
        Self {
            clock,
            rng,
            settings: PracticeSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: PracticeSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &PracticeSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Mutable access to the clock, for hosts and tests driving a fixed clock.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Start a session of `game` with up to `desired_count` questions.
    ///
    /// The count is clamped to the number of words in the lesson.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyLesson` if the lesson has no words.
    pub fn start_session(
        &mut self,
        lesson: &Lesson,
        game: GameKind,
        desired_count: usize,
    ) -> Result<Session, PracticeError> {
        if lesson.is_empty() {
            return Err(SessionError::EmptyLesson.into());
        }

        let distractor_count = self.settings.distractor_count();
        let questions = questions::generate(
            game,
            lesson.words(),
            desired_count,
            distractor_count,
            &mut self.rng,
        );

        let short_options = if game.is_choice() {
            questions
                .iter()
                .filter_map(|q| q.options())
                .filter(|options| options.len() <= distractor_count)
                .count()
        } else {
            0
        };
        if short_options > 0 {
            warn!(
                lesson_id = %lesson.id(),
                %game,
                short_options,
                "lesson too small for a full set of distractors"
            );
        }

        let session = Session::new(
            session_id(&mut self.rng),
            lesson.id().clone(),
            game,
            questions,
            self.clock.now(),
        );
        debug!(
            session_id = %session.id(),
            lesson_id = %lesson.id(),
            %game,
            questions = session.questions().len(),
            "practice session started"
        );
        Ok(session)
    }

    /// Start a session using the configured default question count.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyLesson` if the lesson has no words.
    pub fn start_default_session(
        &mut self,
        lesson: &Lesson,
        game: GameKind,
    ) -> Result<Session, PracticeError> {
        let count = self.settings.default_question_count();
        self.start_session(lesson, game, count)
    }

    /// Grade `answer` against the current question and return the next session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` for a finished session and
    /// `SessionError::AnswerKindMismatch` for a judgment/text mix-up.
    pub fn submit_answer(
        &self,
        session: &Session,
        answer: impl Into<Answer>,
    ) -> Result<AnswerOutcome, PracticeError> {
        let outcome = session.submit_answer(answer, self.clock.now())?;
        log_if_completed(&outcome.session);
        Ok(outcome)
    }

    /// Skip the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` for a finished session.
    pub fn advance(&self, session: &Session) -> Result<Session, PracticeError> {
        let next = session.advance(self.clock.now())?;
        log_if_completed(&next);
        Ok(next)
    }

    /// Mark the current typing word as shown now.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotTimed` outside typing challenges.
    pub fn begin_word(&self, session: &Session) -> Result<Session, PracticeError> {
        Ok(session.begin_word(self.clock.now())?)
    }

    /// Reveal the next leading character of the current scrambled word.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoScramble` outside word scramble and
    /// `SessionError::HintsExhausted` once no more characters can be shown.
    pub fn reveal_hint(&self, session: &Session) -> Result<HintOutcome, PracticeError> {
        Ok(session.reveal_hint()?)
    }

    /// Summary for a completed session, scored with the configured table.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InProgress` if questions remain.
    pub fn stats(&self, session: &Session) -> Result<SessionStats, PracticeError> {
        Ok(session_stats(session, self.settings.scoring())?)
    }
}

fn log_if_completed(session: &Session) {
    if session.is_completed() {
        debug!(
            session_id = %session.id(),
            game = %session.game(),
            correct = session.correct_answers(),
            incorrect = session.incorrect_answers(),
            time_spent_ms = session.time_spent().map(|d| d.num_milliseconds()),
            "practice session completed"
        );
    }
}
