//! Widget configuration.
//!
//! Defaults match the stock widget: meter shown to the right of the input,
//! mask toggle enabled, Bootstrap label classes for the verdicts.
//! A configuration can also be loaded from JSON; missing keys take defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::html::Attributes;
use crate::regions::Placement;
use crate::verdict::{default_verdicts, VerdictEntry};

pub const DEFAULT_TEMPLATE: &str = "{label}\n{input}\n{meter}\n{error}\n{hint}";
pub const DEFAULT_METER_TEMPLATE: &str =
    "<div class='kv-scorebar-border'>{bar}\n{score}</div>\n{verdict}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordInputConfig {
    pub show_meter: bool,
    pub placement: Placement,
    pub toggle_mask: bool,
    pub verdicts: Vec<VerdictEntry>,
    /// Outer field template. Ignored when the meter is placed to the right.
    pub template: String,
    pub meter_template: String,
    pub container_options: Attributes,
    /// Meter container options. A `tag` key sets the element name.
    pub meter_options: Attributes,
    pub bar_options: Attributes,
    pub score_options: Attributes,
    pub verdict_options: Attributes,
    pub toggle_options: Attributes,
}

impl Default for PasswordInputConfig {
    fn default() -> Self {
        Self {
            show_meter: true,
            placement: Placement::Right,
            toggle_mask: true,
            verdicts: default_verdicts(),
            template: DEFAULT_TEMPLATE.to_string(),
            meter_template: DEFAULT_METER_TEMPLATE.to_string(),
            container_options: Attributes::from([("class", "kv-password")]),
            meter_options: Attributes::from([("class", "kv-meter")]),
            bar_options: Attributes::from([("class", "kv-scorebar")]),
            score_options: Attributes::from([("class", "kv-score kv-score-0")]),
            verdict_options: Attributes::from([("class", "kv-verdict")]),
            toggle_options: Attributes::from([("title", "Show / Hide Password")]),
        }
    }
}

impl PasswordInputConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `Json` if it is not a valid configuration.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path.as_ref())?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Loading password widget config from {:?}", path.as_ref());

        Self::from_json_str(&content)
    }

    pub fn with_show_meter(mut self, show_meter: bool) -> Self {
        self.show_meter = show_meter;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_toggle_mask(mut self, toggle_mask: bool) -> Self {
        self.toggle_mask = toggle_mask;
        self
    }

    pub fn with_verdicts(mut self, verdicts: Vec<VerdictEntry>) -> Self {
        self.verdicts = verdicts;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_meter_template(mut self, meter_template: impl Into<String>) -> Self {
        self.meter_template = meter_template.into();
        self
    }

    pub fn with_container_options(mut self, options: Attributes) -> Self {
        self.container_options = options;
        self
    }

    pub fn with_meter_options(mut self, options: Attributes) -> Self {
        self.meter_options = options;
        self
    }

    pub fn with_bar_options(mut self, options: Attributes) -> Self {
        self.bar_options = options;
        self
    }

    pub fn with_score_options(mut self, options: Attributes) -> Self {
        self.score_options = options;
        self
    }

    pub fn with_verdict_options(mut self, options: Attributes) -> Self {
        self.verdict_options = options;
        self
    }

    pub fn with_toggle_options(mut self, options: Attributes) -> Self {
        self.toggle_options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = PasswordInputConfig::default();
        assert!(config.show_meter);
        assert!(config.toggle_mask);
        assert_eq!(config.placement, Placement::Right);
        assert_eq!(config.verdicts.len(), 6);
        assert_eq!(config.score_options.get("class"), Some("kv-score kv-score-0"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PasswordInputConfig::from_json_str(
            r#"{"placement": "none", "toggle_mask": false, "bar_options": {"class": "bar", "tag": "span"}}"#,
        )
        .unwrap();
        assert_eq!(config.placement, Placement::None);
        assert!(!config.toggle_mask);
        assert!(config.show_meter);
        assert_eq!(config.bar_options.get("tag"), Some("span"));
        assert_eq!(config.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_invalid_json() {
        let result = PasswordInputConfig::from_json_str(r#"{"placement": "left"}"#);
        assert!(matches!(result, Err(ConfigurationError::Json(_))));
    }

    #[test]
    fn test_from_path() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, r#"{{"show_meter": false}}"#).expect("Failed to write");

        let config = PasswordInputConfig::from_path(temp_file.path()).unwrap();
        assert!(!config.show_meter);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = PasswordInputConfig::from_path("/nonexistent/widget.json");
        assert!(matches!(result, Err(ConfigurationError::Io(_))));
    }
}
