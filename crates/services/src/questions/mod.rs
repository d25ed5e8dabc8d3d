//! Question generators, one per game.

mod choice;
mod fill_blanks;
mod scramble;
mod true_false;
mod typing;

use rand::Rng;

use drill_core::model::{GameKind, Question, WordPair};

pub use choice::{listening_questions, quiz_questions};
pub use fill_blanks::{TEMPLATES, fill_blank_questions};
pub use scramble::{scramble_questions, scramble_word};
pub use true_false::true_false_questions;
pub use typing::typing_questions;

/// Generates up to `count` questions for `game` from `words`.
///
/// Choice games draw distractors from the whole of `words`, not only from the
/// sampled subset.
pub fn generate<R: Rng + ?Sized>(
    game: GameKind,
    words: &[WordPair],
    count: usize,
    distractor_count: usize,
    rng: &mut R,
) -> Vec<Question> {
    match game {
        GameKind::Quiz => quiz_questions(words, count, distractor_count, rng),
        GameKind::Listening => listening_questions(words, count, distractor_count, rng),
        GameKind::FillBlanks => fill_blank_questions(words, count, distractor_count, rng),
        GameKind::TrueFalse => true_false_questions(words, count, rng),
        GameKind::TypingChallenge { direction } => typing_questions(words, count, direction, rng),
        GameKind::WordScramble => scramble_questions(words, count, rng),
    }
}
