//! Rules specific to each contract archetype.
//!
//! These hold even if a template's schema were to mark the fields optional:
//! a token without a name or symbol, or a multi-token without a URI, cannot be
//! generated.

use crate::template::{Archetype, ParamValues};
use crate::values;

/// Applies the archetype rules, skipping fields listed in `already_missing`.
pub fn check(
    archetype: Archetype,
    values: &ParamValues,
    already_missing: &[&str],
    errors: &mut Vec<String>,
) {
    let required_text: &[(&str, &str)] = match archetype {
        Archetype::FungibleToken | Archetype::NonFungibleToken => {
            &[("name", "Name"), ("symbol", "Symbol")]
        }
        Archetype::MultiToken => &[("uri", "URI")],
    };

    for (field, label) in required_text {
        if already_missing.contains(field) {
            continue;
        }
        if !values::is_non_empty_text(values.get(*field)) {
            errors.push(format!("{} is required and must be a non-empty string", label));
        }
    }

    if archetype == Archetype::FungibleToken {
        check_premint(values, errors);
    }
}

/// Premint, when supplied, must be a non-negative number.
fn check_premint(values: &ParamValues, errors: &mut Vec<String>) {
    let premint = values.get("premint");
    if values::is_blank(premint) {
        return;
    }
    match premint.and_then(values::as_number) {
        Some(n) if n >= 0.0 => {}
        _ => errors.push("Premint must be a non-negative number".to_string()),
    }
}
