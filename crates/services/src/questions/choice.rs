use rand::Rng;

use drill_core::model::{AnswerField, Question, QuestionKind, WordPair};

use crate::sampling::{distractors, options_with, question_id, select};

/// Multiple-choice quiz: English prompt, Korean options.
pub fn quiz_questions<R: Rng + ?Sized>(
    words: &[WordPair],
    count: usize,
    distractor_count: usize,
    rng: &mut R,
) -> Vec<Question> {
    choice_questions(words, count, distractor_count, AnswerField::Korean, rng)
}

/// Listening recognition: the host voices `correct_answer` and the player
/// picks it from Korean options.
pub fn listening_questions<R: Rng + ?Sized>(
    words: &[WordPair],
    count: usize,
    distractor_count: usize,
    rng: &mut R,
) -> Vec<Question> {
    choice_questions(words, count, distractor_count, AnswerField::Korean, rng)
}

fn choice_questions<R: Rng + ?Sized>(
    words: &[WordPair],
    count: usize,
    distractor_count: usize,
    field: AnswerField,
    rng: &mut R,
) -> Vec<Question> {
    select(words, count, rng)
        .into_iter()
        .map(|word| {
            let correct_answer = field.of(&word).to_owned();
            let wrong = distractors(words, &correct_answer, field, distractor_count, rng);
            let options = options_with(&correct_answer, wrong, rng);
            Question {
                id: question_id(rng),
                word,
                correct_answer,
                answer_field: field,
                kind: QuestionKind::Choice { options },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn lesson_words(n: usize) -> Vec<WordPair> {
        let pairs = [
            ("사과", "apple"),
            ("배", "pear"),
            ("물", "water"),
            ("불", "fire"),
            ("꽃", "flower"),
            ("책", "book"),
        ];
        pairs
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, (k, e))| WordPair::new(format!("w{i}"), *k, *e))
            .collect()
    }

    #[test]
    fn quiz_clamps_to_lesson_size() {
        let words = lesson_words(5);
        let mut rng = StdRng::seed_from_u64(42);
        let questions = quiz_questions(&words, 10, 3, &mut rng);
        assert_eq!(questions.len(), 5);
        for q in &questions {
            let options = q.options().unwrap();
            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|o| **o == q.correct_answer).count(), 1);
            let unique: HashSet<_> = options.iter().collect();
            assert_eq!(unique.len(), options.len());
            assert_eq!(q.correct_answer, q.word.korean);
        }
    }

    #[test]
    fn small_lesson_gives_short_options() {
        let words = lesson_words(2);
        let mut rng = StdRng::seed_from_u64(42);
        let questions = quiz_questions(&words, 2, 3, &mut rng);
        assert!(questions.iter().all(|q| q.options().unwrap().len() == 2));
    }

    #[test]
    fn one_word_lesson_degrades_to_single_option() {
        let words = lesson_words(1);
        let mut rng = StdRng::seed_from_u64(42);
        let questions = quiz_questions(&words, 5, 3, &mut rng);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options().unwrap(), &["사과".to_owned()][..]);
    }

    #[test]
    fn listening_answers_in_korean_like_quiz() {
        let words = lesson_words(4);
        let mut rng = StdRng::seed_from_u64(8);
        let questions = listening_questions(&words, 4, 3, &mut rng);
        assert_eq!(questions.len(), 4);
        for q in &questions {
            assert_eq!(q.correct_answer, q.word.korean);
            assert_eq!(q.answer_field, AnswerField::Korean);
            let korean: HashSet<_> = words.iter().map(|w| w.korean.as_str()).collect();
            assert!(q.options().unwrap().iter().all(|o| korean.contains(o.as_str())));
        }
    }

    #[test]
    fn same_seed_same_questions() {
        let words = lesson_words(6);
        let a = quiz_questions(&words, 4, 3, &mut StdRng::seed_from_u64(5));
        let b = quiz_questions(&words, 4, 3, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
