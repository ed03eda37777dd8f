//! Password input widget - orchestrates one render.
//!
//! The widget moves through `Unconfigured -> Initialized -> TemplateBuilt ->
//! Rendered`. Each state is its own type: [`PasswordInput::init`] consumes the
//! unconfigured widget and returns a [`PreparedPasswordInput`], and only that
//! type has `run`. All configuration errors surface from `init`; `run` cannot
//! fail.
//!
//! The toggle is composed in `init` rather than in `run`, so `TemplateBuilt`
//! already holds the final template and any toggle addon. `run` only hands the
//! field to the host and closes the container.

use crate::binding::{BindingPayload, ScriptEmission};
use crate::config::PasswordInputConfig;
use crate::error::{ConfigurationError, WidgetResult};
use crate::host::{input_id, Addon, FieldRequest, FormHost, HostCapability, InputWidgetContext};
use crate::html::{begin_tag, end_tag, Attributes};
use crate::identity::{resolve_id, Region};
use crate::regions::{compose_field, compose_meter, compose_toggle, field_template, MeterParts, ToggleOutput};
use crate::template::{validate_template, TemplateKind, UnknownSlot};
use crate::verdict::VerdictTable;

const CONTAINER_TAG: &str = "div";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Unconfigured,
    Initialized,
    TemplateBuilt,
    Rendered,
}

fn slot_error(kind: TemplateKind) -> impl FnOnce(UnknownSlot) -> ConfigurationError {
    move |UnknownSlot(slot)| {
        let template = kind.name();
        #[cfg(feature = "tracing")]
        tracing::error!("Unknown slot {{{}}} in {} template", slot, template);
        ConfigurationError::UnknownSlot { template, slot }
    }
}

/// A password input awaiting initialization.
pub struct PasswordInput<'h> {
    context: InputWidgetContext<'h>,
    config: PasswordInputConfig,
}

impl<'h> PasswordInput<'h> {
    pub fn new(context: InputWidgetContext<'h>, config: PasswordInputConfig) -> Self {
        Self { context, config }
    }

    pub fn state(&self) -> WidgetState {
        WidgetState::Unconfigured
    }

    /// Validates the configuration and builds the final field template.
    ///
    /// # Errors
    /// - `MissingHost` / `IncompatibleHost` if the form host cannot render the field
    /// - verdict table errors (see [`VerdictTable::new`])
    /// - `UnknownSlot` if a template uses a slot its kind does not accept
    pub fn init(self) -> WidgetResult<PreparedPasswordInput<'h>> {
        let PasswordInput { context, config } = self;

        let host = context.host.ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::error!("Password widget initialized without a form host");
            ConfigurationError::MissingHost
        })?;
        let capability = host.capability();
        if capability == HostCapability::Unsupported {
            #[cfg(feature = "tracing")]
            tracing::error!("Form host cannot render password fields");
            return Err(ConfigurationError::IncompatibleHost);
        }

        let verdicts = VerdictTable::new(&config.verdicts).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Invalid verdict table: {}", _e);
        })?;
        validate_template(&config.template, TemplateKind::Field).map_err(slot_error(TemplateKind::Field))?;
        validate_template(&config.meter_template, TemplateKind::Meter).map_err(slot_error(TemplateKind::Meter))?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Password widget state: {:?}", WidgetState::Initialized);

        let InputWidgetContext {
            model,
            attribute,
            mut options,
            ..
        } = context;

        let id = match options.get("id") {
            Some(id) => id.to_string(),
            None => {
                let id = input_id(&model, &attribute);
                options.insert("id", id.clone());
                id
            }
        };

        let mut container_options = config.container_options;
        resolve_id(&mut container_options, Region::Container, &id);

        let mut meter = String::new();
        let mut scripts = None;
        if config.show_meter {
            let mut verdict_options = config.verdict_options;
            let mut meter_options = config.meter_options;
            let mut bar_options = config.bar_options;
            let mut score_options = config.score_options;
            let verdict_id = resolve_id(&mut verdict_options, Region::Verdict, &id);
            resolve_id(&mut meter_options, Region::Meter, &id);
            let bar_id = resolve_id(&mut bar_options, Region::Bar, &id);
            let score_id = resolve_id(&mut score_options, Region::Score, &id);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Meter ids resolved: bar={}, score={}, verdict={}",
                bar_id,
                score_id,
                verdict_id
            );

            let parts = MeterParts::at_rest(bar_options, score_options, verdict_options, verdicts.resting());
            meter = compose_meter(&parts, &config.meter_template, meter_options).map_err(slot_error(TemplateKind::Meter))?;

            let payload = BindingPayload::new(&id, &bar_id, &score_id, &verdict_id, verdicts.styled());
            let emission = ScriptEmission::new(&payload)?;
            options.insert("onkeyup", emission.keyup.clone());
            scripts = Some(emission);
        }

        let (addon, input_group) = if config.toggle_mask {
            match compose_toggle(config.toggle_options, &id, capability) {
                ToggleOutput::Addon(addon) => (Some(addon), None),
                ToggleOutput::InputGroup(group) => (None, Some(group)),
            }
        } else {
            (None, None)
        };

        let layout = field_template(&config.template, config.placement, config.show_meter);
        let template = compose_field(&layout, &meter, input_group.as_deref()).map_err(slot_error(TemplateKind::Field))?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Password widget {} state: {:?}", id, WidgetState::TemplateBuilt);

        Ok(PreparedPasswordInput {
            host,
            model,
            attribute,
            input_options: options,
            template,
            addon,
            container_open: begin_tag(CONTAINER_TAG, &container_options),
            scripts,
        })
    }

    /// Initializes and renders in one step.
    pub fn render(self) -> WidgetResult<RenderedPasswordInput> {
        Ok(self.init()?.run())
    }
}

/// A widget whose template is built and ready to hand to the form host.
pub struct PreparedPasswordInput<'h> {
    host: &'h dyn FormHost,
    model: String,
    attribute: String,
    input_options: Attributes,
    template: String,
    addon: Option<Addon>,
    container_open: String,
    scripts: Option<ScriptEmission>,
}

impl<'h> PreparedPasswordInput<'h> {
    pub fn state(&self) -> WidgetState {
        WidgetState::TemplateBuilt
    }

    /// Opening tag of the widget container.
    pub fn container_open(&self) -> &str {
        &self.container_open
    }

    /// The field template passed to the host; only host slots remain.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn input_options(&self) -> &Attributes {
        &self.input_options
    }

    /// Toggle content for hosts with native addon support.
    pub fn addon(&self) -> Option<&Addon> {
        self.addon.as_ref()
    }

    /// Client invocations; `None` when the meter is hidden.
    pub fn scripts(&self) -> Option<&ScriptEmission> {
        self.scripts.as_ref()
    }

    /// Renders the field through the host and closes the container.
    pub fn run(self) -> RenderedPasswordInput {
        let field = self.host.render_field(FieldRequest {
            model: &self.model,
            attribute: &self.attribute,
            template: &self.template,
            addon: self.addon.as_ref(),
            input_options: &self.input_options,
        });

        let mut markup = self.container_open;
        markup.push_str(&field);
        markup.push_str(&end_tag(CONTAINER_TAG));

        #[cfg(feature = "tracing")]
        tracing::debug!("Password widget state: {:?}", WidgetState::Rendered);

        RenderedPasswordInput {
            markup,
            scripts: self.scripts,
        }
    }
}

/// Output of one render: the widget markup and the scripts to attach to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPasswordInput {
    pub markup: String,
    pub scripts: Option<ScriptEmission>,
}

impl RenderedPasswordInput {
    pub fn state(&self) -> WidgetState {
        WidgetState::Rendered
    }
}
