//! Typed view over resolved parameter values.

use crate::template::{ContractTemplate, ParamValues};
use crate::values;

/// Parameter values for one generation call, restricted to the template's
/// recognized keys with declared defaults applied.
#[derive(Debug, Clone)]
pub struct TokenOptions {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    resolved: ParamValues,
}

impl TokenOptions {
    pub fn resolve(template: &ContractTemplate, values: &ParamValues) -> Self {
        let resolved = template.resolve_values(values);
        Self {
            name: values::as_text(resolved.get("name")),
            symbol: values::as_text(resolved.get("symbol")),
            uri: values::as_text(resolved.get("uri")),
            resolved,
        }
    }

    /// Whether a boolean capability is switched on. Unset or unreadable
    /// flags count as off.
    pub fn flag(&self, key: &str) -> bool {
        self.resolved
            .get(key)
            .and_then(values::as_flag)
            .unwrap_or(false)
    }

    /// A non-empty text value.
    pub fn text(&self, key: &str) -> Option<String> {
        let value = self.resolved.get(key)?;
        if values::is_blank(Some(value)) {
            return None;
        }
        Some(values::as_text(Some(value)))
    }

    /// Premint amount as literal source text, when greater than zero.
    pub fn premint(&self) -> Option<String> {
        let value = self.resolved.get("premint")?;
        let n = values::as_number(value)?;
        if n > 0.0 {
            values::render_amount(value)
        } else {
            None
        }
    }

    /// The values generation actually used.
    pub fn into_values(self) -> ParamValues {
        self.resolved
    }
}
