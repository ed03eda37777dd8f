//! Client scorer binding.
//!
//! The scorer receives one JSON payload naming the elements it updates and
//! the styled verdicts it swaps in. The same serialized payload is embedded
//! in the keyup handler and in the load-time script.

use serde::Serialize;

use crate::error::ConfigurationError;

/// Called on every keyup as `checkPwd(value, payload)`.
pub const CHECK_HOOK: &str = "checkPwd";
/// Called once at page load as `initMeter(payload)`.
pub const INIT_HOOK: &str = "initMeter";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingPayload {
    pub el_pwd: String,
    pub el_bar: String,
    pub el_score: String,
    pub el_verdict: String,
    pub verdicts: Vec<String>,
}

impl BindingPayload {
    /// Builds the payload from element ids; selectors are `"#" + id`.
    pub fn new(input_id: &str, bar_id: &str, score_id: &str, verdict_id: &str, verdicts: &[String]) -> Self {
        Self {
            el_pwd: selector(input_id),
            el_bar: selector(bar_id),
            el_score: selector(score_id),
            el_verdict: selector(verdict_id),
            verdicts: verdicts.to_vec(),
        }
    }
}

fn selector(id: &str) -> String {
    format!("#{}", id)
}

/// The two client invocations produced for one render.
///
/// `keyup` belongs in the input's `onkeyup` attribute; `on_load` is for the
/// page's load-time script block. Where and how it is attached is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEmission {
    payload: String,
    pub keyup: String,
    pub on_load: String,
}

impl ScriptEmission {
    pub fn new(payload: &BindingPayload) -> Result<Self, ConfigurationError> {
        let json = serde_json::to_string(payload)?;
        Ok(Self {
            keyup: format!("{}(this.value, {})", CHECK_HOOK, json),
            on_load: format!("{}({})", INIT_HOOK, json),
            payload: json,
        })
    }

    /// The serialized payload shared by both invocations.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}
