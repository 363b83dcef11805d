//! The contract template catalog.
//!
//! The catalog is a `static` array built at compile time. Lookups hand out
//! `'static` references, so callers on any thread can read it without locking.

use crate::template::{
    Archetype, ContractTemplate, DefaultValue, ParamKind, ParameterSpec,
};

// =============================================================================
// Parameter schemas
// =============================================================================

const fn text(
    name: &'static str,
    required: bool,
    description: &'static str,
    placeholder: &'static str,
) -> ParameterSpec {
    ParameterSpec {
        name,
        kind: ParamKind::Text,
        required,
        description,
        default_value: None,
        placeholder: Some(placeholder),
    }
}

const fn flag(name: &'static str, default: bool, description: &'static str) -> ParameterSpec {
    ParameterSpec {
        name,
        kind: ParamKind::Boolean,
        required: false,
        description,
        default_value: Some(DefaultValue::Boolean(default)),
        placeholder: None,
    }
}

static ERC20_PARAMETERS: [ParameterSpec; 7] = [
    text("name", true, "The name of your token (e.g., \"My Token\")", "My Token"),
    text("symbol", true, "The symbol of your token (e.g., \"MTK\")", "MTK"),
    ParameterSpec {
        name: "premint",
        kind: ParamKind::Integer,
        required: false,
        description: "Initial supply to mint to deployer address",
        default_value: Some(DefaultValue::Integer(0)),
        placeholder: Some("1000000"),
    },
    flag("mintable", false, "Allow creating new tokens after deployment"),
    flag("burnable", false, "Allow token holders to destroy their tokens"),
    flag("pausable", false, "Allow pausing all token transfers"),
    flag("permit", false, "Enable gasless approvals with EIP-2612"),
];

static ERC721_PARAMETERS: [ParameterSpec; 8] = [
    text("name", true, "The name of your NFT collection", "My NFT Collection"),
    text("symbol", true, "The symbol of your NFT collection", "MNFT"),
    text(
        "baseUri",
        false,
        "Base URI for token metadata",
        "https://api.example.com/metadata/",
    ),
    flag("mintable", true, "Allow minting new NFTs"),
    flag("autoIncrement", true, "Use auto-incrementing token IDs"),
    flag("burnable", false, "Allow NFT holders to burn their tokens"),
    flag("pausable", false, "Allow pausing all token transfers"),
    flag("enumerable", false, "Enable on-chain token enumeration"),
];

static ERC1155_PARAMETERS: [ParameterSpec; 5] = [
    text(
        "uri",
        true,
        "Base URI for all token metadata",
        "https://api.example.com/metadata/{id}.json",
    ),
    flag("mintable", true, "Allow minting new tokens"),
    flag("burnable", false, "Allow token holders to burn their tokens"),
    flag("pausable", false, "Allow pausing all token transfers"),
    flag("supply", false, "Track total supply for each token ID"),
];

// =============================================================================
// Catalog
// =============================================================================

/// Every template the studio can generate, in display order.
pub static CONTRACT_TEMPLATES: [ContractTemplate; 3] = [
    ContractTemplate {
        id: "erc20",
        archetype: Archetype::FungibleToken,
        name: "ERC20 Token",
        description: "Standard fungible token contract with optional features like minting, burning, and pausable functionality.",
        category: "Token",
        icon: Some("🪙"),
        parameters: &ERC20_PARAMETERS,
    },
    ContractTemplate {
        id: "erc721",
        archetype: Archetype::NonFungibleToken,
        name: "ERC721 NFT",
        description: "Non-fungible token (NFT) contract for unique digital assets with optional features.",
        category: "NFT",
        icon: Some("🖼️"),
        parameters: &ERC721_PARAMETERS,
    },
    ContractTemplate {
        id: "erc1155",
        archetype: Archetype::MultiToken,
        name: "ERC1155 Multi-Token",
        description: "Multi-token contract supporting both fungible and non-fungible tokens in a single contract.",
        category: "Token",
        icon: Some("🎨"),
        parameters: &ERC1155_PARAMETERS,
    },
];

/// Finds a template by registry id (`erc20`) or archetype name
/// (`fungible-token`).
pub fn get_template(id: &str) -> Option<&'static ContractTemplate> {
    CONTRACT_TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .or_else(|| {
            let archetype = Archetype::from_id(id)?;
            template_for(archetype)
        })
}

/// The template implementing `archetype`.
pub fn template_for(archetype: Archetype) -> Option<&'static ContractTemplate> {
    CONTRACT_TEMPLATES.iter().find(|t| t.archetype == archetype)
}

/// All templates in catalog order.
pub fn list_templates() -> &'static [ContractTemplate] {
    &CONTRACT_TEMPLATES
}

/// Templates whose category equals `category` exactly, in catalog order.
pub fn list_templates_by_category(category: &str) -> Vec<&'static ContractTemplate> {
    CONTRACT_TEMPLATES
        .iter()
        .filter(|t| t.category == category)
        .collect()
}

/// Unique categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for template in &CONTRACT_TEMPLATES {
        if !seen.contains(&template.category) {
            seen.push(template.category);
        }
    }
    seen
}
