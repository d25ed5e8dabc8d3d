//! Answer equality rules shared by every game.
//!
//! Translation (English) answers compare case-insensitively; native-script
//! (Korean) answers must match exactly. Both sides are trimmed first.

use crate::model::AnswerField;

/// Trim surrounding whitespace from a typed or selected answer.
#[must_use]
pub fn normalize_answer(s: &str) -> &str {
    s.trim()
}

/// Case-insensitive comparison for translation-direction answers.
#[must_use]
pub fn translation_matches(expected: &str, given: &str) -> bool {
    normalize_answer(expected).to_lowercase() == normalize_answer(given).to_lowercase()
}

/// Exact comparison for native-script answers.
#[must_use]
pub fn native_matches(expected: &str, given: &str) -> bool {
    normalize_answer(expected) == normalize_answer(given)
}

/// Key under which two values of `field` count as the same answer.
///
/// Used to keep choice options distinct under the same rule that grades them.
#[must_use]
pub fn answer_key(field: AnswerField, value: &str) -> String {
    match field {
        AnswerField::English => normalize_answer(value).to_lowercase(),
        AnswerField::Korean => normalize_answer(value).to_owned(),
    }
}

/// Compare `given` against `expected` using the rule for `field`.
#[must_use]
pub fn answers_match(field: AnswerField, expected: &str, given: &str) -> bool {
    match field {
        AnswerField::English => translation_matches(expected, given),
        AnswerField::Korean => native_matches(expected, given),
    }
}
