#![allow(dead_code)]

use std::cell::RefCell;

use pwd_meter_widget::html::tag;
use pwd_meter_widget::{Attributes, FieldRequest, FormHost, HostCapability};

/// What the widget handed to the host on its last render.
#[derive(Debug, Clone)]
pub struct RecordedField {
    pub model: String,
    pub attribute: String,
    pub template: String,
    pub addon: Option<String>,
    pub input_options: Attributes,
}

/// Form host that records each request and renders a minimal field.
pub struct RecordingHost {
    capability: HostCapability,
    pub last: RefCell<Option<RecordedField>>,
}

impl RecordingHost {
    pub fn new(capability: HostCapability) -> Self {
        Self {
            capability,
            last: RefCell::new(None),
        }
    }

    pub fn native() -> Self {
        Self::new(HostCapability::NativeAddon)
    }

    pub fn generic() -> Self {
        Self::new(HostCapability::Generic)
    }

    pub fn recorded(&self) -> RecordedField {
        self.last.borrow().clone().expect("host was never asked to render")
    }
}

impl FormHost for RecordingHost {
    fn capability(&self) -> HostCapability {
        self.capability
    }

    fn render_field(&self, request: FieldRequest<'_>) -> String {
        let id = request.input_options.get_or("id", "");
        let mut input = format!("<input type=\"password\" id=\"{}\">", id);
        if let Some(addon) = request.addon {
            input = tag(
                "div",
                &format!("{}<span class=\"input-group-addon\">{}</span>", input, addon.append),
                &Attributes::from([("class", "input-group")]),
            );
        }

        *self.last.borrow_mut() = Some(RecordedField {
            model: request.model.to_string(),
            attribute: request.attribute.to_string(),
            template: request.template.to_string(),
            addon: request.addon.map(|a| a.append.clone()),
            input_options: request.input_options.clone(),
        });

        request
            .template
            .replace("{label}", &format!("<label for=\"{}\">Password</label>", id))
            .replace("{input}", &input)
            .replace("{error}", "<div class=\"help-block\"></div>")
            .replace("{hint}", "")
    }
}
