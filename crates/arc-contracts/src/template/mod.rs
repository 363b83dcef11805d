//! Template schema types.
//!
//! A [`ContractTemplate`] describes one contract archetype and the parameters a
//! caller may supply for it. Templates are defined once in the
//! [`registry`](crate::registry) and never mutated.

use std::collections::BTreeMap;

use serde::Serialize;

/// Caller-supplied parameter values, keyed by parameter name.
///
/// A `BTreeMap` keeps iteration (and the echoed `parameters` of a generated
/// contract) in a stable order.
pub type ParamValues = BTreeMap<String, serde_json::Value>;

/// The three contract shapes the generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    /// ERC20 fungible token.
    FungibleToken,
    /// ERC721 non-fungible token.
    NonFungibleToken,
    /// ERC1155 multi-token.
    MultiToken,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [
        Archetype::FungibleToken,
        Archetype::NonFungibleToken,
        Archetype::MultiToken,
    ];

    /// Resolves either a registry id (`erc20`) or an archetype name
    /// (`fungible-token`).
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "erc20" | "fungible-token" => Some(Archetype::FungibleToken),
            "erc721" | "non-fungible-token" => Some(Archetype::NonFungibleToken),
            "erc1155" | "multi-token" => Some(Archetype::MultiToken),
            _ => None,
        }
    }

    /// Archetype name, e.g. `fungible-token`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::FungibleToken => "fungible-token",
            Archetype::NonFungibleToken => "non-fungible-token",
            Archetype::MultiToken => "multi-token",
        }
    }

    /// Registry id of the template implementing this archetype.
    pub fn template_id(&self) -> &'static str {
        match self {
            Archetype::FungibleToken => "erc20",
            Archetype::NonFungibleToken => "erc721",
            Archetype::MultiToken => "erc1155",
        }
    }
}

/// Value kind of a template parameter.
///
/// Serialized with the names form clients already understand
/// (`string`, `number`, `boolean`, `address`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamKind {
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "number")]
    Integer,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "address")]
    Address,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Text => "string",
            ParamKind::Integer => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Address => "address",
        }
    }
}

/// Default value declared by a parameter. Its variant always matches the
/// parameter's [`ParamKind`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Integer(u64),
    Boolean(bool),
}

impl DefaultValue {
    pub fn to_json(self) -> serde_json::Value {
        match self {
            DefaultValue::Integer(n) => serde_json::Value::from(n),
            DefaultValue::Boolean(b) => serde_json::Value::Bool(b),
        }
    }
}

/// One entry of a template's parameter schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

/// A contract archetype with its display metadata and parameter schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTemplate {
    pub id: &'static str,
    pub archetype: Archetype,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub parameters: &'static [ParameterSpec],
}

impl ContractTemplate {
    /// Looks up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Whether `key` is declared by this template's schema.
    pub fn recognizes(&self, key: &str) -> bool {
        self.parameter(key).is_some()
    }

    /// Keys in `values` that the schema does not declare.
    pub fn unrecognized_keys<'a>(&self, values: &'a ParamValues) -> Vec<&'a str> {
        values
            .keys()
            .map(String::as_str)
            .filter(|key| !self.recognizes(key))
            .collect()
    }

    /// Values restricted to recognized keys, with declared defaults filled in
    /// for anything the caller left out.
    pub fn resolve_values(&self, values: &ParamValues) -> ParamValues {
        let mut resolved = ParamValues::new();
        for spec in self.parameters {
            match values.get(spec.name) {
                Some(value) if !value.is_null() => {
                    resolved.insert(spec.name.to_string(), value.clone());
                }
                _ => {
                    if let Some(default) = spec.default_value {
                        resolved.insert(spec.name.to_string(), default.to_json());
                    }
                }
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn archetype_accepts_registry_ids_and_names() {
        assert_eq!(Archetype::from_id("erc20"), Some(Archetype::FungibleToken));
        assert_eq!(Archetype::from_id("fungible-token"), Some(Archetype::FungibleToken));
        assert_eq!(Archetype::from_id("erc721"), Some(Archetype::NonFungibleToken));
        assert_eq!(Archetype::from_id("multi-token"), Some(Archetype::MultiToken));
        assert_eq!(Archetype::from_id("ERC20"), None);
        assert_eq!(Archetype::from_id("nonexistent-id"), None);
    }

    #[test]
    fn archetype_names_round_trip() {
        for archetype in Archetype::ALL {
            assert_eq!(Archetype::from_id(archetype.as_str()), Some(archetype));
            assert_eq!(Archetype::from_id(archetype.template_id()), Some(archetype));
        }
    }

    #[test]
    fn parameter_spec_serializes_with_wire_names() {
        let spec = ParameterSpec {
            name: "premint",
            kind: ParamKind::Integer,
            required: false,
            description: "Initial supply",
            default_value: Some(DefaultValue::Integer(0)),
            placeholder: None,
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["type"], json!("number"));
        assert_eq!(value["defaultValue"], json!(0));
        assert!(value.get("placeholder").is_none());
    }
}
