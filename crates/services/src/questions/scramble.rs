use rand::Rng;
use rand::seq::SliceRandom;

use drill_core::model::{AnswerField, Question, QuestionKind, WordPair};

use crate::sampling::{question_id, select};

/// Uniformly permutes the characters of `word`.
///
/// When the shuffle lands on the original order, the first character is
/// swapped with the first position holding a different character, so any
/// word with at least two distinct characters always comes back changed.
/// Words of one character, or made of a single repeated character, have no
/// other arrangement and are returned as-is.
pub fn scramble_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    if original.len() <= 1 {
        return word.to_owned();
    }

    let mut chars = original.clone();
    chars.shuffle(rng);
    if chars == original {
        if let Some(pos) = chars.iter().position(|c| *c != chars[0]) {
            chars.swap(0, pos);
        }
    }
    chars.into_iter().collect()
}

/// Word scramble: rebuild the Korean word from its shuffled characters.
pub fn scramble_questions<R: Rng + ?Sized>(
    words: &[WordPair],
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    select(words, count, rng)
        .into_iter()
        .map(|word| {
            let scrambled_word = scramble_word(&word.korean, rng);
            Question {
                id: question_id(rng),
                correct_answer: word.korean.clone(),
                answer_field: AnswerField::Korean,
                kind: QuestionKind::Scramble {
                    scrambled_word,
                    original_word: word.korean.clone(),
                    hints_revealed: 0,
                },
                word,
            }
        })
        .collect()
}
