//! Random selection primitives shared by the question generators.
//!
//! Every function takes the generator explicitly so a seeded RNG reproduces
//! the same sequence.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use drill_core::matching::answer_key;
use drill_core::model::{AnswerField, QuestionId, SessionId, WordPair};

/// Picks `min(count, words.len())` distinct words in shuffled order.
pub fn select<R: Rng + ?Sized>(words: &[WordPair], count: usize, rng: &mut R) -> Vec<WordPair> {
    let mut pool = words.to_vec();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// Picks up to `count` unique wrong answers from the `field` side of `pool`.
///
/// Values are de-duplicated and compared against `correct` under the same
/// equality rule that grades answers, so no option can also be right. When the
/// pool is too small the result is shorter than `count`, possibly empty.
pub fn distractors<R: Rng + ?Sized>(
    pool: &[WordPair],
    correct: &str,
    field: AnswerField,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let correct_key = answer_key(field, correct);
    let mut seen = HashSet::from([correct_key]);
    let mut candidates: Vec<String> = pool
        .iter()
        .map(|word| field.of(word))
        .filter(|value| seen.insert(answer_key(field, value)))
        .map(str::to_owned)
        .collect();

    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

/// `correct` plus its distractors, shuffled.
pub fn options_with<R: Rng + ?Sized>(
    correct: &str,
    distractors: Vec<String>,
    rng: &mut R,
) -> Vec<String> {
    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct.to_owned());
    options.extend(distractors);
    options.shuffle(rng);
    options
}

pub fn question_id<R: Rng + ?Sized>(rng: &mut R) -> QuestionId {
    QuestionId::from_random_bytes(rng.random())
}

pub fn session_id<R: Rng + ?Sized>(rng: &mut R) -> SessionId {
    SessionId::from_random_bytes(rng.random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(pairs: &[(&str, &str)]) -> Vec<WordPair> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (k, e))| WordPair::new(format!("w{i}"), *k, *e))
            .collect()
    }

    #[test]
    fn select_clamps_and_keeps_members_distinct() {
        let pool = words(&[("하나", "one"), ("둘", "two"), ("셋", "three")]);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = select(&pool, 10, &mut rng);
        assert_eq!(picked.len(), 3);
        let ids: HashSet<_> = picked.iter().map(|w| w.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert!(picked.iter().all(|w| pool.contains(w)));
    }

    #[test]
    fn select_on_empty_pool_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select(&[], 4, &mut rng).is_empty());
        let pool = words(&[("하나", "one")]);
        assert!(select(&pool, 0, &mut rng).is_empty());
    }

    #[test]
    fn select_is_reproducible_for_a_seed() {
        let pool = words(&[("하나", "one"), ("둘", "two"), ("셋", "three"), ("넷", "four")]);
        let a = select(&pool, 3, &mut StdRng::seed_from_u64(99));
        let b = select(&pool, 3, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn distractors_exclude_correct_and_duplicates() {
        let pool = words(&[
            ("사과", "apple"),
            ("사과", "apple again"),
            ("배", "pear"),
            ("배", "pear again"),
            ("물", "water"),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        let picked = distractors(&pool, "사과", AnswerField::Korean, 3, &mut rng);
        assert_eq!(picked.len(), 2);
        assert!(!picked.contains(&"사과".to_owned()));
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), picked.len());
    }

    #[test]
    fn english_distractors_ignore_case_variants_of_correct() {
        let pool = words(&[("사과", "Apple"), ("능금", "apple"), ("배", "pear")]);
        let mut rng = StdRng::seed_from_u64(3);
        let picked = distractors(&pool, "Apple", AnswerField::English, 3, &mut rng);
        assert_eq!(picked, vec!["pear".to_owned()]);
    }

    #[test]
    fn single_word_pool_has_no_distractors() {
        let pool = words(&[("안녕", "hello")]);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(distractors(&pool, "안녕", AnswerField::Korean, 3, &mut rng).is_empty());
    }

    #[test]
    fn options_contain_correct_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let options = options_with("물", vec!["불".into(), "꽃".into()], &mut rng);
        assert_eq!(options.len(), 3);
        assert_eq!(options.iter().filter(|o| *o == "물").count(), 1);
    }
}
