use rand::Rng;
use rand::seq::IndexedRandom;

use drill_core::matching::translation_matches;
use drill_core::model::{AnswerField, Question, QuestionKind, WordPair};

use crate::sampling::{question_id, select};

/// True/false judgment: a Korean word shown with either its own translation
/// or another word's.
///
/// A false statement needs another word whose translation differs; when none
/// exists (for instance a one-word lesson) the question is always true.
pub fn true_false_questions<R: Rng + ?Sized>(
    words: &[WordPair],
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    select(words, count, rng)
        .into_iter()
        .map(|word| {
            let wants_true = rng.random_bool(0.5);
            let false_source = if wants_true {
                None
            } else {
                let others: Vec<&WordPair> = words
                    .iter()
                    .filter(|other| {
                        other.id != word.id && !translation_matches(&other.english, &word.english)
                    })
                    .collect();
                others.choose(rng).map(|other| other.english.clone())
            };

            let is_true = false_source.is_none();
            let displayed_translation = false_source.unwrap_or_else(|| word.english.clone());
            Question {
                id: question_id(rng),
                correct_answer: is_true.to_string(),
                answer_field: AnswerField::English,
                kind: QuestionKind::TrueFalse {
                    displayed_word: word.korean.clone(),
                    displayed_translation,
                    is_true,
                    correct_translation: word.english.clone(),
                },
                word,
            }
        })
        .collect()
}
