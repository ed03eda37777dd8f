//! Field region - the outer template and the meter's placement in it.

use serde::{Deserialize, Serialize};

use crate::template::{substitute, Slot, TemplateKind, UnknownSlot};

/// Where the meter is laid out relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Below the input, following the configured template.
    None,
    /// In a column beside the input.
    #[default]
    Right,
}

/// Two-column layout used for [`Placement::Right`].
pub const RIGHT_TEMPLATE: &str = r#"<div class="row">
    <div class="col-sm-9">
        {input}
    </div>
    <div class="col-sm-3">
        {meter}
    </div>
</div>"#;

/// Picks the outer template.
///
/// With the meter shown and placed right, the configured template is replaced
/// by the two-column layout, even if the caller customised it.
pub fn field_template(configured: &str, placement: Placement, show_meter: bool) -> String {
    if show_meter && placement == Placement::Right {
        format!("{{label}}\n{}\n{{error}}\n{{hint}}", RIGHT_TEMPLATE)
    } else {
        configured.to_string()
    }
}

/// Substitutes the `{meter}` slot, and `{input}` when the toggle wraps it.
///
/// Pass `""` for `meter` when the meter is hidden. Both slots are filled in
/// one pass, so neither inserted fragment is scanned for slots.
pub fn compose_field(template: &str, meter: &str, input: Option<&str>) -> Result<String, UnknownSlot> {
    match input {
        Some(input) => substitute(template, TemplateKind::Field, &[(Slot::Meter, meter), (Slot::Input, input)]),
        None => substitute(template, TemplateKind::Field, &[(Slot::Meter, meter)]),
    }
}
