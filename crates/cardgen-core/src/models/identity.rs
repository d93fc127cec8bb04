//! Identity field model.
//!
//! The five canonical labels rendered on the text panel. Each field resolves
//! from one or more accepted input aliases in a fixed priority order; a
//! missing or empty value resolves to [`FIELD_PLACEHOLDER`]. Constructed once
//! per request and immutable afterwards.

use serde::Serialize;

use crate::constants::FIELD_PLACEHOLDER;

/// Raw per-field inputs, including accepted aliases, before resolution.
#[derive(Debug, Default, Clone)]
pub struct IdentityAliases {
    pub name: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    /// Accepted alias for `date_of_birth`, lower priority.
    pub birth_date: Option<String>,
    pub issue_date: Option<String>,
    /// Accepted alias for `issue_date`; takes priority when both are present.
    pub delivery_date: Option<String>,
    pub expiration_date: Option<String>,
}

/// Resolved identity fields as rendered on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityFields {
    pub name: String,
    pub address: String,
    pub date_of_birth: String,
    pub issue_date: String,
    pub expiration_date: String,
}

impl IdentityFields {
    /// Resolve aliased inputs into the canonical fields. For each field the
    /// first non-empty candidate wins; otherwise the placeholder.
    pub fn resolve(input: IdentityAliases) -> Self {
        Self {
            name: resolve_field([input.name]),
            address: resolve_field([input.address]),
            date_of_birth: resolve_field([input.date_of_birth, input.birth_date]),
            issue_date: resolve_field([input.delivery_date, input.issue_date]),
            expiration_date: resolve_field([input.expiration_date]),
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Name:", self.name.as_str()),
            ("Date of Birth:", self.date_of_birth.as_str()),
            ("Address:", self.address.as_str()),
            ("Issue Date:", self.issue_date.as_str()),
            ("Expiration Date:", self.expiration_date.as_str()),
        ]
    }
}

fn resolve_field<const N: usize>(candidates: [Option<String>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string())
}
