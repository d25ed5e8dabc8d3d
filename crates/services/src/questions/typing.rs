use rand::Rng;

use drill_core::model::{AnswerDirection, Question, QuestionKind, WordPair, WordTiming};

use crate::sampling::{question_id, select};

/// Timed typing: no options, the answer side follows `direction`.
pub fn typing_questions<R: Rng + ?Sized>(
    words: &[WordPair],
    count: usize,
    direction: AnswerDirection,
    rng: &mut R,
) -> Vec<Question> {
    let field = direction.answer_field();
    select(words, count, rng)
        .into_iter()
        .map(|word| Question {
            id: question_id(rng),
            correct_answer: field.of(&word).to_owned(),
            word,
            answer_field: field,
            kind: QuestionKind::Typing {
                timing: WordTiming::default(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn direction_sets_expected_answer() {
        let words = vec![WordPair::new("w1", "물", "water")];
        let mut rng = StdRng::seed_from_u64(1);
        let to_english = typing_questions(&words, 1, AnswerDirection::KoreanToEnglish, &mut rng);
        assert_eq!(to_english[0].correct_answer, "water");
        assert_eq!(to_english[0].prompt(), "물");

        let to_korean = typing_questions(&words, 1, AnswerDirection::EnglishToKorean, &mut rng);
        assert_eq!(to_korean[0].correct_answer, "물");
        assert_eq!(to_korean[0].prompt(), "water");
    }
}
