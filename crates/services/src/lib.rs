#![forbid(unsafe_code)]

pub mod error;
pub mod practice;
pub mod questions;
pub mod sampling;
pub mod settings_loader;

pub use drill_core::Clock;

pub use error::PracticeError;
pub use practice::PracticeService;
pub use settings_loader::settings_from_json;
