use rand::Rng;

use drill_core::model::{AnswerField, BLANK_MARKER, Question, QuestionKind, WordPair};

use crate::sampling::{distractors, options_with, question_id, select};

/// Cloze templates. `{english}` is replaced by the word's meaning and
/// `___` marks the blank the Korean word fills.
pub const TEMPLATES: &[&str] = &[
    "The Korean word for \"{english}\" is ___.",
    "To say \"{english}\" in Korean, you say ___.",
    "___ means \"{english}\" in English.",
    "In class today we learned ___, which means \"{english}\".",
    "My friend asked how to say \"{english}\", and I answered ___.",
    "Can you remember? \"{english}\" is ___ in Korean.",
];

const PLACEHOLDER: &str = "{english}";

/// Fill-in-the-blank: a cloze sentence with Korean options.
pub fn fill_blank_questions<R: Rng + ?Sized>(
    words: &[WordPair],
    count: usize,
    distractor_count: usize,
    rng: &mut R,
) -> Vec<Question> {
    select(words, count, rng)
        .into_iter()
        .map(|word| {
            let template = TEMPLATES[rng.random_range(0..TEMPLATES.len())];
            let (sentence, blank_position) = render(template, &word.english);
            let correct_answer = word.korean.clone();
            let wrong = distractors(
                words,
                &correct_answer,
                AnswerField::Korean,
                distractor_count,
                rng,
            );
            let options = options_with(&correct_answer, wrong, rng);
            Question {
                id: question_id(rng),
                word,
                correct_answer,
                answer_field: AnswerField::Korean,
                kind: QuestionKind::FillBlank {
                    sentence,
                    blank_position,
                    options,
                },
            }
        })
        .collect()
}

/// Fills the template and returns the sentence with the char index of the blank.
///
/// The position is taken from the template split, so a meaning that itself
/// contains the marker cannot move the blank.
fn render(template: &str, english: &str) -> (String, usize) {
    let (before, after) = template
        .split_once(BLANK_MARKER)
        .unwrap_or((template, ""));
    let before = before.replace(PLACEHOLDER, english);
    let after = after.replace(PLACEHOLDER, english);
    let blank_position = before.chars().count();
    (format!("{before}{BLANK_MARKER}{after}"), blank_position)
}
