use drill_core::settings::{PracticeSettings, PracticeSettingsDraft};

use crate::error::PracticeError;

/// Parse and validate practice settings from a JSON document.
///
/// Missing fields take their defaults, so `{}` is a valid document.
///
/// # Errors
///
/// Returns `PracticeError::Config` for malformed JSON and
/// `PracticeError::Settings` when a value fails validation.
pub fn settings_from_json(json: &str) -> Result<PracticeSettings, PracticeError> {
    let draft: PracticeSettingsDraft = serde_json::from_str(json)?;
    Ok(draft.validate()?)
}
