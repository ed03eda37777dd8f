//! Toggle region - the show/hide checkbox next to the password input.

use crate::host::{Addon, HostCapability};
use crate::html::{checkbox, tag, Attributes};
use crate::identity::{resolve_id, Region};

/// Client function called as `togPwdMask(inputSelector, checkboxSelector)`.
pub const TOGGLE_HOOK: &str = "togPwdMask";

/// How the toggle reaches the host form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutput {
    /// Passed to the host as addon content; the template is unchanged.
    Addon(Addon),
    /// Replacement for the template's `{input}` slot: an input group holding
    /// the input and the toggle.
    InputGroup(String),
}

/// Builds the toggle checkbox for the input `input_id`.
///
/// The toggle id defaults to `"{input_id}-tog"`. Its `onchange` handler is
/// always set to the toggle hook.
pub fn compose_toggle(
    mut options: Attributes,
    input_id: &str,
    capability: HostCapability,
) -> ToggleOutput {
    let toggle_id = resolve_id(&mut options, Region::Toggle, input_id);
    options.insert(
        "onchange",
        format!("{}(\"#{}\", \"#{}\")", TOGGLE_HOOK, input_id, toggle_id),
    );
    let input = checkbox(&toggle_id, false, &options);

    if capability == HostCapability::NativeAddon {
        #[cfg(feature = "tracing")]
        tracing::debug!("Toggle {} passed to host as addon", toggle_id);

        return ToggleOutput::Addon(Addon {
            append: tag("span", &input, &Attributes::new()),
        });
    }

    let addon = tag(
        "span",
        &input,
        &Attributes::from([("class", "input-group-addon")]),
    );
    ToggleOutput::InputGroup(format!("<div class=\"input-group\">{{input}}{}</div>", addon))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Attributes {
        Attributes::from([("title", "Show / Hide Password")])
    }

    #[test]
    fn test_native_toggle_is_addon() {
        let output = compose_toggle(options(), "pwd-1", HostCapability::NativeAddon);
        match output {
            ToggleOutput::Addon(addon) => {
                assert!(addon.append.starts_with("<span><input type=\"checkbox\" name=\"pwd-1-tog\""));
                assert!(addon.append.contains("id=\"pwd-1-tog\""));
                assert!(addon.append.contains(
                    "onchange=\"togPwdMask(&quot;#pwd-1&quot;, &quot;#pwd-1-tog&quot;)\""
                ));
                assert!(!addon.append.contains("input-group-addon"));
            }
            other => panic!("Expected addon, got {:?}", other),
        }
    }

    #[test]
    fn test_generic_toggle_wraps_input() {
        let output = compose_toggle(options(), "pwd-1", HostCapability::Generic);
        match output {
            ToggleOutput::InputGroup(group) => {
                assert!(group.starts_with("<div class=\"input-group\">{input}<span class=\"input-group-addon\">"));
                assert!(group.ends_with("</span></div>"));
                assert_eq!(group.matches("type=\"checkbox\"").count(), 1);
            }
            other => panic!("Expected input group, got {:?}", other),
        }
    }

    #[test]
    fn test_toggle_keeps_explicit_id() {
        let opts = options().with("id", "my-toggle");
        let output = compose_toggle(opts, "pwd-1", HostCapability::NativeAddon);
        let ToggleOutput::Addon(addon) = output else {
            panic!("Expected addon");
        };
        assert!(addon.append.contains("id=\"my-toggle\""));
        assert!(addon.append.contains("&quot;#my-toggle&quot;"));
        assert!(!addon.append.contains("pwd-1-tog"));
    }
}
