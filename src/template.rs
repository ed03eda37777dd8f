//! Named-slot template substitution.
//!
//! Each kind of template has a fixed vocabulary of `{slot}` tokens: the field
//! template takes `{label}`, `{input}`, `{meter}`, `{error}` and `{hint}`, the
//! meter template takes `{bar}`, `{score}` and `{verdict}`. Any other `{name}`
//! token is rejected. Substitution is a single left-to-right pass: inserted
//! content is never rescanned, and allowed slots with no value are left in
//! place for a later stage to fill.

use std::fmt;

/// A placeholder recognised in widget templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Label,
    Input,
    Meter,
    Error,
    Hint,
    Bar,
    Score,
    Verdict,
}

impl Slot {
    pub const ALL: [Slot; 8] = [
        Slot::Label,
        Slot::Input,
        Slot::Meter,
        Slot::Error,
        Slot::Hint,
        Slot::Bar,
        Slot::Score,
        Slot::Verdict,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Label => "label",
            Slot::Input => "input",
            Slot::Meter => "meter",
            Slot::Error => "error",
            Slot::Hint => "hint",
            Slot::Bar => "bar",
            Slot::Score => "score",
            Slot::Verdict => "verdict",
        }
    }

    fn from_name(name: &str) -> Option<Slot> {
        Slot::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

/// Which template a string is, and so which slots it may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Field,
    Meter,
}

impl TemplateKind {
    pub fn slots(self) -> &'static [Slot] {
        match self {
            TemplateKind::Field => &[Slot::Label, Slot::Input, Slot::Meter, Slot::Error, Slot::Hint],
            TemplateKind::Meter => &[Slot::Bar, Slot::Score, Slot::Verdict],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Field => "field",
            TemplateKind::Meter => "meter",
        }
    }
}

/// A `{name}` token the template kind does not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlot(pub String);

enum Token<'a> {
    Text(&'a str),
    Slot(Slot),
}

fn tokenize(template: &str, kind: TemplateKind) -> Result<Vec<Token<'_>>, UnknownSlot> {
    let mut tokens = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let ident_len = after
            .find(|c: char| !(c.is_ascii_alphabetic() || c == '_'))
            .unwrap_or(after.len());
        if ident_len == 0 || !after[ident_len..].starts_with('}') {
            tokens.push(Token::Text(&rest[..=open]));
            rest = after;
            continue;
        }
        let name = &after[..ident_len];
        let slot = Slot::from_name(name)
            .filter(|slot| kind.slots().contains(slot))
            .ok_or_else(|| UnknownSlot(name.to_string()))?;
        if open > 0 {
            tokens.push(Token::Text(&rest[..open]));
        }
        tokens.push(Token::Slot(slot));
        rest = &after[ident_len + 1..];
    }
    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    Ok(tokens)
}

/// Checks that every `{name}` token in `template` is a slot of `kind`.
pub fn validate_template(template: &str, kind: TemplateKind) -> Result<(), UnknownSlot> {
    tokenize(template, kind).map(|_| ())
}

/// Replaces each slot listed in `slots` with its value.
pub fn substitute(template: &str, kind: TemplateKind, slots: &[(Slot, &str)]) -> Result<String, UnknownSlot> {
    let mut out = String::with_capacity(template.len());
    for token in tokenize(template, kind)? {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Slot(slot) => match slots.iter().find(|(s, _)| *s == slot) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(&slot.to_string()),
            },
        }
    }
    Ok(out)
}
