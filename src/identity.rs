//! Element identifier resolution.
//!
//! Every region of the widget gets the id `"{base}-{suffix}"` unless the caller
//! already set one. The resolved id is written back into the region's
//! attribute map so later stages read it from one place. Uniqueness within the
//! page is the caller's responsibility.

use crate::html::Attributes;

/// A sub-element of the widget that carries its own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Meter,
    Bar,
    Score,
    Verdict,
    Toggle,
    Container,
}

impl Region {
    pub fn suffix(self) -> &'static str {
        match self {
            Region::Meter => "meter",
            Region::Bar => "bar",
            Region::Score => "score",
            Region::Verdict => "verdict",
            Region::Toggle => "tog",
            Region::Container => "widget",
        }
    }
}

/// Returns the id of `region`, synthesizing and storing it if `attrs` has none.
pub fn resolve_id(attrs: &mut Attributes, region: Region, base_id: &str) -> String {
    if let Some(id) = attrs.get("id") {
        return id.to_string();
    }
    let id = format!("{}-{}", base_id, region.suffix());
    attrs.insert("id", id.clone());
    id
}
