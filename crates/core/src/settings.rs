use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::GameKind;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("default question count must be > 0")]
    InvalidQuestionCount,

    #[error("distractor count must be between 1 and {max}, got {provided}")]
    InvalidDistractorCount { provided: usize, max: usize },

    #[error("speed tiers must have strictly descending wpm thresholds")]
    UnorderedSpeedTiers,
}

/// Upper bound on distractors per choice question.
pub const MAX_DISTRACTORS: usize = 9;

//
// ─── SCORING TABLE ─────────────────────────────────────────────────────────────
//

/// A typing speed threshold and the bonus XP it awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedTier {
    pub min_wpm: u32,
    pub bonus: u32,
}

/// Per-game XP constants.
///
/// Fields missing from a deserialized table fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTable {
    pub quiz_per_correct: u32,
    pub listening_per_correct: u32,
    pub fill_blanks_per_correct: u32,
    pub true_false_per_correct: u32,
    /// Multiplied by the session's longest streak.
    pub streak_bonus_rate: u32,
    pub typing_per_correct: u32,
    /// Checked in order; the first tier whose threshold is met wins.
    pub speed_tiers: Vec<SpeedTier>,
    pub scramble_per_correct: u32,
    /// Subtracted per revealed hint, saturating at zero.
    pub hint_penalty: u32,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            quiz_per_correct: 10,
            listening_per_correct: 10,
            fill_blanks_per_correct: 15,
            true_false_per_correct: 5,
            streak_bonus_rate: 2,
            typing_per_correct: 10,
            speed_tiers: vec![
                SpeedTier {
                    min_wpm: 40,
                    bonus: 50,
                },
                SpeedTier {
                    min_wpm: 30,
                    bonus: 30,
                },
                SpeedTier {
                    min_wpm: 20,
                    bonus: 15,
                },
            ],
            scramble_per_correct: 15,
            hint_penalty: 5,
        }
    }
}

impl ScoringTable {
    /// XP awarded for each correct answer in `game`.
    #[must_use]
    pub fn per_correct(&self, game: GameKind) -> u32 {
        match game {
            GameKind::Quiz => self.quiz_per_correct,
            GameKind::Listening => self.listening_per_correct,
            GameKind::FillBlanks => self.fill_blanks_per_correct,
            GameKind::TrueFalse => self.true_false_per_correct,
            GameKind::TypingChallenge { .. } => self.typing_per_correct,
            GameKind::WordScramble => self.scramble_per_correct,
        }
    }

    /// Bonus for the first tier whose threshold `wpm` meets.
    #[must_use]
    pub fn speed_bonus(&self, wpm: u32) -> u32 {
        self.speed_tiers
            .iter()
            .find(|tier| wpm >= tier.min_wpm)
            .map_or(0, |tier| tier.bonus)
    }

    /// # Errors
    ///
    /// Returns `SettingsError::UnorderedSpeedTiers` if thresholds are not
    /// strictly descending.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let ordered = self
            .speed_tiers
            .windows(2)
            .all(|pair| pair[0].min_wpm > pair[1].min_wpm);
        if ordered {
            Ok(())
        } else {
            Err(SettingsError::UnorderedSpeedTiers)
        }
    }
}

//
// ─── PRACTICE SETTINGS ─────────────────────────────────────────────────────────
//

/// Validated configuration for practice sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSettings {
    default_question_count: usize,
    distractor_count: usize,
    scoring: ScoringTable,
}

/// Unvalidated settings, typically deserialized from a host config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PracticeSettingsDraft {
    pub default_question_count: Option<usize>,
    pub distractor_count: Option<usize>,
    pub scoring: Option<ScoringTable>,
}

impl PracticeSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, filling gaps from the defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a count is out of range or the speed tiers are
    /// not ordered.
    pub fn validate(self) -> Result<PracticeSettings, SettingsError> {
        let defaults = PracticeSettings::default();
        let default_question_count = self
            .default_question_count
            .unwrap_or(defaults.default_question_count);
        let distractor_count = self.distractor_count.unwrap_or(defaults.distractor_count);
        let scoring = self.scoring.unwrap_or(defaults.scoring);

        if default_question_count == 0 {
            return Err(SettingsError::InvalidQuestionCount);
        }
        if !(1..=MAX_DISTRACTORS).contains(&distractor_count) {
            return Err(SettingsError::InvalidDistractorCount {
                provided: distractor_count,
                max: MAX_DISTRACTORS,
            });
        }
        scoring.validate()?;

        Ok(PracticeSettings {
            default_question_count,
            distractor_count,
            scoring,
        })
    }
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            default_question_count: 10,
            distractor_count: 3,
            scoring: ScoringTable::default(),
        }
    }
}

impl PracticeSettings {
    #[must_use]
    pub fn default_question_count(&self) -> usize {
        self.default_question_count
    }

    #[must_use]
    pub fn distractor_count(&self) -> usize {
        self.distractor_count
    }

    #[must_use]
    pub fn scoring(&self) -> &ScoringTable {
        &self.scoring
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_draft_yields_defaults() {
        let settings = PracticeSettingsDraft::new().validate().unwrap();
        assert_eq!(settings, PracticeSettings::default());
        assert_eq!(settings.distractor_count(), 3);
        assert_eq!(settings.default_question_count(), 10);
    }

    #[test]
    fn draft_rejects_zero_questions() {
        let draft = PracticeSettingsDraft {
            default_question_count: Some(0),
            ..PracticeSettingsDraft::default()
        };
        assert_eq!(draft.validate().unwrap_err(), SettingsError::InvalidQuestionCount);
    }

    #[test]
    fn draft_rejects_out_of_range_distractors() {
        let draft = PracticeSettingsDraft {
            distractor_count: Some(0),
            ..PracticeSettingsDraft::default()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            SettingsError::InvalidDistractorCount {
                provided: 0,
                max: MAX_DISTRACTORS
            }
        );
    }

    #[test]
    fn speed_tiers_must_descend() {
        let scoring = ScoringTable {
            speed_tiers: vec![
                SpeedTier {
                    min_wpm: 20,
                    bonus: 15,
                },
                SpeedTier {
                    min_wpm: 40,
                    bonus: 50,
                },
            ],
            ..ScoringTable::default()
        };
        assert_eq!(scoring.validate(), Err(SettingsError::UnorderedSpeedTiers));
    }

    #[test]
    fn speed_bonus_picks_first_met_tier() {
        let table = ScoringTable::default();
        assert_eq!(table.speed_bonus(55), 50);
        assert_eq!(table.speed_bonus(30), 30);
        assert_eq!(table.speed_bonus(25), 15);
        assert_eq!(table.speed_bonus(19), 0);
    }

    #[test]
    fn partial_scoring_table_fills_defaults() {
        let table: ScoringTable = serde_json::from_str(r#"{"quiz_per_correct": 12}"#).unwrap();
        assert_eq!(table.quiz_per_correct, 12);
        assert_eq!(table.fill_blanks_per_correct, 15);
        assert_eq!(table.speed_tiers.len(), 3);
    }
}
