//! Schema-driven checks: required fields and value kinds.

use serde_json::Value;

use crate::template::{ContractTemplate, ParamKind, ParamValues};
use crate::values;

/// Reports every required parameter that is absent, null or empty.
///
/// Returns the names that were reported so later rules can skip them.
pub fn check_required(
    template: &ContractTemplate,
    values: &ParamValues,
    errors: &mut Vec<String>,
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    for spec in template.parameters.iter().filter(|p| p.required) {
        if values::is_blank(values.get(spec.name)) {
            errors.push(format!("{} is required", spec.name));
            missing.push(spec.name);
        }
    }
    missing
}

/// Checks that every supplied, non-empty value matches its declared kind.
pub fn check_kinds(template: &ContractTemplate, values: &ParamValues, errors: &mut Vec<String>) {
    for spec in template.parameters {
        let value = values.get(spec.name);
        if values::is_blank(value) {
            continue;
        }
        let Some(value) = value else { continue };

        let message = match spec.kind {
            ParamKind::Integer if values::as_number(value).is_none() => "Must be a valid number",
            ParamKind::Boolean if values::as_flag(value).is_none() => "Must be true or false",
            ParamKind::Address if !matches!(value, Value::String(s) if values::is_address(s)) => {
                "Must be a valid address"
            }
            ParamKind::Text if !value.is_string() => "Must be a string",
            _ => continue,
        };
        errors.push(format!("{}: {}", spec.name, message));
    }
}
