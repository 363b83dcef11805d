//! Validation of caller-supplied template parameters.
//!
//! Every rule runs; messages are collected rather than returned on the first
//! failure so a form can show all problems at once.

mod archetype;
mod schema;

use serde::Serialize;

use crate::diagnostic::ContractError;
use crate::registry;
use crate::template::{ContractTemplate, ParamValues};
use crate::values;

/// Outcome of validating a parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Converts a failed result into [`ContractError::InvalidParameters`].
    pub fn into_result(self) -> Result<(), ContractError> {
        if self.valid {
            Ok(())
        } else {
            Err(ContractError::InvalidParameters {
                errors: self.errors,
            })
        }
    }
}

/// Resolves `template_id` and validates `values` against its schema.
pub fn validate(template_id: &str, values: &ParamValues) -> Result<ValidationResult, ContractError> {
    let template = registry::get_template(template_id).ok_or_else(|| {
        ContractError::TemplateNotFound {
            id: template_id.to_string(),
        }
    })?;
    Ok(validate_parameters(template, values))
}

/// Validates `values` against a known template.
pub fn validate_parameters(template: &ContractTemplate, values: &ParamValues) -> ValidationResult {
    let mut errors = Vec::new();

    // Schema: required fields, then value kinds
    let missing = schema::check_required(template, values, &mut errors);
    schema::check_kinds(template, values, &mut errors);

    // Archetype rules that hold regardless of the schema's required flags
    archetype::check(template.archetype, values, &missing, &mut errors);

    ValidationResult::from_errors(errors)
}

/// Checks that the value used as the contract name is a Solidity identifier.
///
/// Only applied in strict identifier mode.
pub fn validate_identifiers(template: &ContractTemplate, values: &ParamValues) -> Vec<String> {
    let mut errors = Vec::new();
    if template.recognizes("symbol") {
        if let Some(serde_json::Value::String(symbol)) = values.get("symbol") {
            if !symbol.trim().is_empty() && !values::is_identifier(symbol) {
                errors.push("Symbol must be a valid Solidity identifier".to_string());
            }
        }
    }
    errors
}
