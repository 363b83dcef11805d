//! Parameter input for `check` and `generate`.
//!
//! Values come from an optional JSON file, then `-p key=value` pairs, with
//! later pairs overriding earlier ones.

use std::path::Path;

use arc_contracts::{ContractError, ContractTemplate, ParamKind, ParamValues};
use serde_json::Value;

/// Parses `key=value`. The value is read as JSON when it parses (numbers,
/// booleans, quoted strings), otherwise taken as a plain string.
///
/// Keys the template declares as text always yield a string, so `name=2024`
/// stays `"2024"`.
pub fn parse_assignment(
    template: Option<&ContractTemplate>,
    raw: &str,
) -> Result<(String, Value), ContractError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(ContractError::MalformedRequest {
            message: format!("expected key=value, got '{}'", raw),
        });
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(ContractError::MalformedRequest {
            message: format!("missing parameter name in '{}'", raw),
        });
    }

    let is_text = template
        .and_then(|t| t.parameter(key))
        .is_some_and(|spec| spec.kind == ParamKind::Text);

    let value = if is_text {
        match serde_json::from_str(value) {
            Ok(Value::String(text)) => Value::String(text),
            _ => Value::String(value.to_string()),
        }
    } else {
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
    };
    Ok((key.to_string(), value))
}

/// Reads a JSON object of parameter values from `path`.
pub fn read_params_file(path: &Path) -> Result<ParamValues, ContractError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ContractError::io(path, e.to_string()))?;

    match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Object(map)) => Ok(map.into_iter().collect()),
        Ok(_) => Err(ContractError::MalformedRequest {
            message: format!("{} must contain a JSON object", path.display()),
        }),
        Err(e) => Err(ContractError::MalformedRequest {
            message: format!("{}: {}", path.display(), e),
        }),
    }
}

/// Merges the file (if any) and the command-line assignments.
pub fn collect(
    template: Option<&ContractTemplate>,
    file: Option<&Path>,
    assignments: &[String],
) -> Result<ParamValues, ContractError> {
    let mut values = match file {
        Some(path) => read_params_file(path)?,
        None => ParamValues::new(),
    };

    for raw in assignments {
        let (key, value) = parse_assignment(template, raw)?;
        values.insert(key, value);
    }

    Ok(values)
}
