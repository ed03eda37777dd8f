//! Password input widget with strength meter
//!
//! This library renders the markup for a password field with an optional
//! show/hide toggle and an optional strength meter, plus the script payload
//! a client-side scorer uses to update the meter as the user types.
//!
//! Field rendering itself is delegated to a [`FormHost`] supplied by the
//! caller. The scoring heuristic lives entirely on the client.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter_widget::{
//!     FieldRequest, FormHost, HostCapability, InputWidgetContext, PasswordInput,
//!     PasswordInputConfig,
//! };
//!
//! struct Form;
//!
//! impl FormHost for Form {
//!     fn capability(&self) -> HostCapability {
//!         HostCapability::Generic
//!     }
//!
//!     fn render_field(&self, request: FieldRequest<'_>) -> String {
//!         request.template.replace("{input}", "<input type=\"password\">")
//!     }
//! }
//!
//! let form = Form;
//! let context = InputWidgetContext::new(&form, "LoginForm", "password");
//! let rendered = PasswordInput::new(context, PasswordInputConfig::default())
//!     .render()
//!     .expect("valid configuration");
//!
//! println!("{}", rendered.markup);
//! if let Some(scripts) = rendered.scripts {
//!     println!("<script>{}</script>", scripts.on_load);
//! }
//! ```

mod binding;
mod config;
mod error;
mod host;
pub mod html;
mod identity;
mod regions;
mod template;
mod verdict;
mod widget;

// Public API
pub use binding::{BindingPayload, ScriptEmission, CHECK_HOOK, INIT_HOOK};
pub use config::{PasswordInputConfig, DEFAULT_METER_TEMPLATE, DEFAULT_TEMPLATE};
pub use error::{ConfigurationError, WidgetResult};
pub use host::{input_id, Addon, FieldRequest, FormHost, HostCapability, InputWidgetContext};
pub use html::Attributes;
pub use identity::{resolve_id, Region};
pub use regions::{
    compose_field, compose_meter, compose_toggle, field_template, MeterParts, Placement,
    ToggleOutput, RESTING_SCORE, RIGHT_TEMPLATE, TOGGLE_HOOK,
};
pub use template::{substitute, validate_template, Slot, TemplateKind, UnknownSlot};
pub use verdict::{default_verdicts, VerdictEntry, VerdictLevel, VerdictTable};
pub use widget::{PasswordInput, PreparedPasswordInput, RenderedPasswordInput, WidgetState};
