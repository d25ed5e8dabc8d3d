//! Final performance metrics for completed sessions.

use chrono::Duration;

use crate::model::{GameKind, Session, SessionError, SessionExtras};
use crate::settings::ScoringTable;

/// Game-specific rate metrics reported alongside the common counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMetrics {
    None,
    Streak {
        max_streak: u32,
    },
    Typing {
        words_per_minute: u32,
        /// Mean recorded interval per answered word.
        average_word_time: Duration,
    },
    Scramble {
        hints_used: u32,
    },
}

/// Summary of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub game: GameKind,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub total: usize,
    /// Integer percentage, rounded half-up.
    pub accuracy: u32,
    pub xp_earned: u32,
    pub time_spent: Duration,
    pub metrics: GameMetrics,
}

/// `100 * correct / total`, rounded half-up; zero when `total` is zero.
#[must_use]
pub fn accuracy(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u64;
    let total = total as u64;
    u32::try_from((200 * correct + total) / (2 * total)).unwrap_or(100)
}

/// `round(words / minutes)`; zero when no time was recorded.
#[must_use]
pub fn words_per_minute(words: usize, elapsed: Duration) -> u32 {
    let millis = elapsed.num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    let millis = millis as u128;
    let scaled = (words as u128 * 60_000 + millis / 2) / millis;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Computes the summary for a completed session using `table` for XP.
///
/// # Errors
///
/// Returns `SessionError::InProgress` if the session has unanswered questions.
pub fn session_stats(session: &Session, table: &ScoringTable) -> Result<SessionStats, SessionError> {
    let time_spent = session.time_spent().ok_or(SessionError::InProgress)?;
    let game = session.game();
    let correct = session.correct_answers();
    let total = session.questions().len();
    let correct_u32 = u32::try_from(correct).unwrap_or(u32::MAX);

    let base_xp = correct_u32.saturating_mul(table.per_correct(game));
    let (bonus, penalty, metrics) = match session.extras() {
        SessionExtras::None => (0, 0, GameMetrics::None),
        SessionExtras::Streak { max_streak, .. } => (
            max_streak.saturating_mul(table.streak_bonus_rate),
            0,
            GameMetrics::Streak { max_streak },
        ),
        SessionExtras::Typing { words_per_minute } => {
            let wpm = words_per_minute.unwrap_or(0);
            let answered = i32::try_from(session.current_index()).unwrap_or(i32::MAX);
            let average_word_time = if answered == 0 {
                Duration::zero()
            } else {
                session.typing_time() / answered
            };
            (
                table.speed_bonus(wpm),
                0,
                GameMetrics::Typing {
                    words_per_minute: wpm,
                    average_word_time,
                },
            )
        }
        SessionExtras::Scramble { hints } => (
            0,
            hints.saturating_mul(table.hint_penalty),
            GameMetrics::Scramble { hints_used: hints },
        ),
    };

    Ok(SessionStats {
        game,
        correct_answers: correct,
        incorrect_answers: session.incorrect_answers(),
        total,
        accuracy: accuracy(correct, total),
        xp_earned: base_xp.saturating_add(bonus).saturating_sub(penalty),
        time_spent,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AnswerField, LessonId, Question, QuestionId, QuestionKind, SessionId, WordPair,
    };
    use crate::time::fixed_now;
    use pretty_assertions::assert_eq;

    fn choice_session(game: GameKind, words: &[(&str, &str)]) -> Session {
        let questions = words
            .iter()
            .enumerate()
            .map(|(i, (korean, english))| Question {
                id: QuestionId::from_random_bytes([i as u8; 16]),
                word: WordPair::new(format!("w{i}"), *korean, *english),
                correct_answer: (*korean).to_owned(),
                answer_field: AnswerField::Korean,
                kind: QuestionKind::Choice {
                    options: vec![(*korean).to_owned()],
                },
            })
            .collect();
        Session::new(
            SessionId::from_random_bytes([1; 16]),
            LessonId::new("l1"),
            game,
            questions,
            fixed_now(),
        )
    }

    #[test]
    fn accuracy_rounds_half_up() {
        assert_eq!(accuracy(0, 0), 0);
        assert_eq!(accuracy(1, 3), 33);
        assert_eq!(accuracy(2, 3), 67);
        assert_eq!(accuracy(1, 8), 13);
        assert_eq!(accuracy(5, 5), 100);
    }

    #[test]
    fn wpm_rounds_to_nearest() {
        assert_eq!(words_per_minute(10, Duration::seconds(0)), 0);
        assert_eq!(words_per_minute(10, Duration::seconds(60)), 10);
        assert_eq!(words_per_minute(7, Duration::seconds(40)), 11);
    }

    #[test]
    fn stats_require_completion() {
        let session = choice_session(GameKind::Quiz, &[("사과", "apple")]);
        assert_eq!(
            session_stats(&session, &ScoringTable::default()).unwrap_err(),
            SessionError::InProgress
        );
    }

    #[test]
    fn quiz_xp_is_per_correct() {
        let table = ScoringTable::default();
        let s = choice_session(GameKind::Quiz, &[("사과", "apple"), ("배", "pear")]);
        let s = s.submit_answer("사과", fixed_now()).unwrap().session;
        let s = s.submit_answer("사과", fixed_now()).unwrap().session;
        let stats = session_stats(&s, &table).unwrap();
        assert_eq!(
            stats,
            SessionStats {
                game: GameKind::Quiz,
                correct_answers: 1,
                incorrect_answers: 1,
                total: 2,
                accuracy: 50,
                xp_earned: 10,
                time_spent: Duration::zero(),
                metrics: GameMetrics::None,
            }
        );
    }

    #[test]
    fn custom_table_changes_xp() {
        let table = ScoringTable {
            fill_blanks_per_correct: 7,
            ..ScoringTable::default()
        };
        let s = choice_session(GameKind::FillBlanks, &[("사과", "apple")]);
        let s = s.submit_answer("사과", fixed_now()).unwrap().session;
        assert_eq!(session_stats(&s, &table).unwrap().xp_earned, 7);
    }
}
