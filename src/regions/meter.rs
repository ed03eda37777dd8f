//! Meter region - bar, score and verdict composed into the meter container.

use crate::html::{tag, Attributes};
use crate::template::{substitute, Slot, TemplateKind, UnknownSlot};

/// Score text before any input has been scored.
pub const RESTING_SCORE: &str = "0%";

const BAR_CONTENT: &str = "&nbsp;";

/// Rendered bar, score and verdict fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterParts {
    pub bar: String,
    pub score: String,
    pub verdict: String,
}

impl MeterParts {
    /// Renders the three parts in their resting state.
    ///
    /// Each options map may carry a `tag` key naming the element (default `div`).
    pub fn at_rest(
        bar_options: Attributes,
        score_options: Attributes,
        verdict_options: Attributes,
        resting_verdict: &str,
    ) -> Self {
        Self {
            bar: render_region(bar_options, BAR_CONTENT),
            score: render_region(score_options, RESTING_SCORE),
            verdict: render_region(verdict_options, resting_verdict),
        }
    }
}

fn render_region(mut options: Attributes, content: &str) -> String {
    let name = options.remove_or("tag", "div");
    tag(&name, content, &options)
}

/// Fills the meter template with `parts` and wraps it in the meter container.
pub fn compose_meter(
    parts: &MeterParts,
    meter_template: &str,
    meter_options: Attributes,
) -> Result<String, UnknownSlot> {
    let inner = substitute(
        meter_template,
        TemplateKind::Meter,
        &[
            (Slot::Bar, &parts.bar),
            (Slot::Score, &parts.score),
            (Slot::Verdict, &parts.verdict),
        ],
    )?;
    Ok(render_region(meter_options, &inner))
}
