//! Widget regions
//!
//! Each composer builds one region of the rendered widget.

mod field;
mod meter;
mod toggle;

pub use field::{compose_field, field_template, Placement, RIGHT_TEMPLATE};
pub use meter::{compose_meter, MeterParts, RESTING_SCORE};
pub use toggle::{compose_toggle, ToggleOutput, TOGGLE_HOOK};
