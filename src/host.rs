//! Host form collaborator contract.
//!
//! The widget never renders the labelled field itself; it hands a finished
//! template and the input options to a [`FormHost`], which fills `{label}`,
//! `{input}`, `{error}` and `{hint}` and returns the field markup.

use crate::html::Attributes;

/// What a host form can do with an input-group addon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCapability {
    /// Accepts addon content and builds the input group itself.
    NativeAddon,
    /// Renders plain fields; the widget builds any input group.
    Generic,
    /// Cannot render password fields.
    Unsupported,
}

/// Content appended after the input inside the host's input group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addon {
    pub append: String,
}

/// Everything the host needs to render the password field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRequest<'a> {
    pub model: &'a str,
    pub attribute: &'a str,
    pub template: &'a str,
    pub addon: Option<&'a Addon>,
    pub input_options: &'a Attributes,
}

pub trait FormHost {
    fn capability(&self) -> HostCapability;

    /// Renders a labelled password input from `request`.
    fn render_field(&self, request: FieldRequest<'_>) -> String;
}

/// The model binding and input options the widget is rendered for.
pub struct InputWidgetContext<'h> {
    pub host: Option<&'h dyn FormHost>,
    pub model: String,
    pub attribute: String,
    pub options: Attributes,
}

impl<'h> InputWidgetContext<'h> {
    pub fn new(host: &'h dyn FormHost, model: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            host: Some(host),
            model: model.into(),
            attribute: attribute.into(),
            options: Attributes::new(),
        }
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '+')
}

/// Splits a tabular attribute such as `[0]password[1]` into its prefix,
/// bare name and suffix. A plain attribute has an empty prefix and suffix.
fn split_attribute(attribute: &str) -> (&str, &str, &str) {
    let starts = attribute
        .match_indices(']')
        .map(|(i, _)| i + 1)
        .rev()
        .chain(std::iter::once(0));
    for start in starts {
        let rest = &attribute[start..];
        let len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        let suffix = &rest[len..];
        if len > 0 && (suffix.is_empty() || suffix.starts_with('[')) {
            return (&attribute[..start], &rest[..len], suffix);
        }
    }
    ("", attribute, "")
}

/// Derives the input id the host form uses for `model[attribute]`.
///
/// Tabular attributes keep their prefix outside the model brackets, so
/// `("LoginForm", "[0]password")` names `LoginForm[0][password]`.
pub fn input_id(model: &str, attribute: &str) -> String {
    let (prefix, attr, suffix) = split_attribute(attribute);
    let name = if model.is_empty() {
        format!("{}{}{}", prefix, attr, suffix)
    } else {
        format!("{}{}[{}]{}", model, prefix, attr, suffix)
    };
    name.to_lowercase()
        .replace("[]", "")
        .replace("][", "-")
        .replace('[', "-")
        .replace(']', "")
        .replace([' ', '.'], "-")
}
