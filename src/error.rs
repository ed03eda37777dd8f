//! Configuration errors raised while initializing the widget.

use thiserror::Error;

use crate::verdict::VerdictLevel;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("The form host must be set and must be a compatible form host")]
    MissingHost,
    #[error("The form host must be a compatible form host")]
    IncompatibleHost,
    #[error("Expected 6 verdicts, got {0}")]
    VerdictCount(usize),
    #[error("Verdict '{0}' is configured more than once")]
    DuplicateVerdict(VerdictLevel),
    #[error("Unknown slot '{{{slot}}}' in {template} template")]
    UnknownSlot { template: &'static str, slot: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

pub type WidgetResult<T> = Result<T, ConfigurationError>;
