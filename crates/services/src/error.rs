//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::model::SessionError;
use drill_core::settings::SettingsError;

/// Errors emitted by `PracticeService` and settings loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("invalid practice settings document: {0}")]
    Config(#[from] serde_json::Error),
}
