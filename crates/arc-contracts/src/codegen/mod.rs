//! Solidity code generation from template parameters.
//!
//! Each archetype module composes a [`ContractBuilder`] from the caller's
//! options; the builder renders the final source. Generation is pure: the
//! same template and values always produce byte-identical source.
//!
//! Names, symbols and URIs are substituted verbatim. Nothing is escaped, so
//! callers are trusted to pass values that are safe to embed in Solidity
//! string literals and, for the symbol, usable as a contract identifier.

mod builder;
mod erc1155;
mod erc20;
mod erc721;
mod options;
mod solidity;

use serde::Serialize;
use tracing::debug;

use crate::diagnostic::ContractError;
use crate::registry;
use crate::template::{Archetype, ContractTemplate, ParamValues};

pub use builder::ContractBuilder;
pub use options::TokenOptions;
pub use solidity::{LICENSE_HEADER, PRAGMA};

/// Source language of generated contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Solidity,
}

/// A generated contract and the inputs it was generated from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContract {
    pub source_code: String,
    pub language: Language,
    pub template_id: String,
    pub contract_name: String,
    /// Recognized parameters with defaults applied.
    pub parameters: ParamValues,
}

impl GeneratedContract {
    /// File name for the contract, e.g. `MTK.sol`.
    pub fn file_name(&self) -> String {
        format!("{}.sol", self.contract_name)
    }
}

/// Generates a contract for `template_id`.
///
/// Fails with [`ContractError::UnknownTemplate`] when the id names none of
/// the supported archetypes. Parameters are not validated here.
pub fn generate(template_id: &str, values: &ParamValues) -> Result<GeneratedContract, ContractError> {
    let template = Archetype::from_id(template_id)
        .and_then(registry::template_for)
        .ok_or_else(|| ContractError::UnknownTemplate {
            id: template_id.to_string(),
        })?;
    Ok(generate_for(template, values))
}

/// Generates a contract for a template that is already resolved.
pub fn generate_for(template: &ContractTemplate, values: &ParamValues) -> GeneratedContract {
    let ignored = template.unrecognized_keys(values);
    if !ignored.is_empty() {
        debug!(template = template.id, keys = ?ignored, "ignoring unrecognized parameters");
    }

    let opts = TokenOptions::resolve(template, values);
    let (contract, contract_name) = compose(template.archetype, &opts);

    debug!(
        template = template.id,
        inheritance = ?contract.inheritance(),
        "composed contract"
    );

    GeneratedContract {
        source_code: contract.render(&contract_name),
        language: Language::Solidity,
        template_id: template.id.to_string(),
        contract_name,
        parameters: opts.into_values(),
    }
}

/// Builds the contract for `archetype` and picks its declared name.
pub fn compose(archetype: Archetype, opts: &TokenOptions) -> (ContractBuilder, String) {
    match archetype {
        Archetype::FungibleToken => (erc20::build(opts), opts.symbol.clone()),
        Archetype::NonFungibleToken => (erc721::build(opts), opts.symbol.clone()),
        Archetype::MultiToken => (erc1155::build(opts), erc1155::CONTRACT_NAME.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> ParamValues {
        serde_json::from_value(value).unwrap()
    }

    fn inheritance_of(source: &str) -> Vec<String> {
        let line = source
            .lines()
            .find(|l| l.starts_with("contract "))
            .unwrap();
        let list = line.split(" is ").nth(1).unwrap().trim_end_matches(" {");
        list.split(", ").map(str::to_string).collect()
    }

    #[test]
    fn erc20_end_to_end() {
        let contract = generate(
            "fungible-token",
            &params(json!({ "name": "My Token", "symbol": "MTK", "premint": 1000, "mintable": true })),
        )
        .unwrap();
        let source = &contract.source_code;

        assert!(source.contains("ERC20(\"My Token\", \"MTK\")"));
        assert!(source.contains("function mint(address to, uint256 amount) public onlyOwner {"));
        assert!(source.contains("_mint(msg.sender, 1000 * 10 ** decimals());"));
        assert!(source.contains("contract MTK is ERC20, Ownable {"));
        assert_eq!(contract.template_id, "erc20");
        assert_eq!(contract.language, Language::Solidity);
    }

    #[test]
    fn erc20_full_feature_inheritance_order() {
        let contract = generate(
            "erc20",
            &params(json!({
                "name": "T", "symbol": "T",
                "permit": true, "pausable": true, "burnable": true, "mintable": true
            })),
        )
        .unwrap();
        assert_eq!(
            inheritance_of(&contract.source_code),
            vec!["ERC20", "Ownable", "ERC20Burnable", "ERC20Pausable", "ERC20Permit"]
        );
        assert_eq!(contract.source_code.matches("Ownable(msg.sender)").count(), 1);
        assert_eq!(
            contract
                .source_code
                .matches("import \"@openzeppelin/contracts/access/Ownable.sol\";")
                .count(),
            1
        );
        assert!(contract.source_code.contains("        ERC20Permit(\"T\")\n"));
    }

    #[test]
    fn erc20_pausable_alone_pulls_in_ownable() {
        let contract = generate("erc20", &params(json!({ "name": "T", "symbol": "T", "pausable": true }))).unwrap();
        assert_eq!(inheritance_of(&contract.source_code), vec!["ERC20", "Ownable", "ERC20Pausable"]);
        assert!(contract.source_code.contains("function unpause() public onlyOwner {"));
    }

    #[test]
    fn erc20_without_premint_has_empty_constructor() {
        let contract = generate("erc20", &params(json!({ "name": "T", "symbol": "T", "premint": 0 }))).unwrap();
        assert!(!contract.source_code.contains("_mint(msg.sender"));
        assert!(contract.source_code.contains("    {}\n"));
        assert_eq!(inheritance_of(&contract.source_code), vec!["ERC20"]);
    }

    #[test]
    fn erc721_defaults_mint_with_auto_increment() {
        let contract = generate("erc721", &params(json!({ "name": "Apes", "symbol": "APE" }))).unwrap();
        let source = &contract.source_code;
        assert!(source.contains("uint256 private _nextTokenId;"));
        assert!(source.contains("function safeMint(address to) public onlyOwner {"));
        assert_eq!(inheritance_of(source), vec!["ERC721", "Ownable"]);
    }

    #[test]
    fn erc721_explicit_ids_and_base_uri() {
        let contract = generate(
            "non-fungible-token",
            &params(json!({
                "name": "Apes", "symbol": "APE",
                "baseUri": "https://example.com/",
                "autoIncrement": false, "enumerable": true, "burnable": true
            })),
        )
        .unwrap();
        let source = &contract.source_code;
        assert!(source.contains("string private _baseTokenURI = \"https://example.com/\";"));
        assert!(source.contains("function safeMint(address to, uint256 tokenId) public onlyOwner {"));
        assert!(!source.contains("_nextTokenId"));
        assert_eq!(
            inheritance_of(source),
            vec!["ERC721", "Ownable", "ERC721Burnable", "ERC721Enumerable"]
        );
        let base_uri = source.find("function _baseURI()").unwrap();
        let mint = source.find("function safeMint").unwrap();
        assert!(base_uri < mint);
    }

    #[test]
    fn erc721_full_feature_inheritance_order() {
        let contract = generate(
            "erc721",
            &params(json!({
                "name": "Apes", "symbol": "APE",
                "enumerable": true, "pausable": true, "burnable": true, "mintable": true
            })),
        )
        .unwrap();
        let source = &contract.source_code;
        assert_eq!(
            inheritance_of(source),
            vec!["ERC721", "Ownable", "ERC721Burnable", "ERC721Pausable", "ERC721Enumerable"]
        );
        assert_eq!(
            source
                .matches("import \"@openzeppelin/contracts/access/Ownable.sol\";")
                .count(),
            1
        );
    }

    #[test]
    fn erc721_token_counter_precedes_base_uri() {
        let contract = generate(
            "erc721",
            &params(json!({ "name": "Apes", "symbol": "APE", "baseUri": "https://example.com/" })),
        )
        .unwrap();
        let source = &contract.source_code;
        let counter = source.find("uint256 private _nextTokenId;").unwrap();
        let base_uri = source.find("string private _baseTokenURI").unwrap();
        assert!(counter < base_uri);
    }

    #[test]
    fn erc1155_full_feature_inheritance_order() {
        let contract = generate(
            "erc1155",
            &params(json!({
                "uri": "ipfs://x/{id}.json",
                "supply": true, "pausable": true, "burnable": true, "mintable": true
            })),
        )
        .unwrap();
        let source = &contract.source_code;
        assert_eq!(
            inheritance_of(source),
            vec!["ERC1155", "Ownable", "ERC1155Burnable", "ERC1155Pausable", "ERC1155Supply"]
        );
        assert_eq!(
            source
                .matches("import \"@openzeppelin/contracts/access/Ownable.sol\";")
                .count(),
            1
        );
        assert_eq!(source.matches("function setURI(").count(), 1);
    }

    #[test]
    fn erc1155_always_has_one_set_uri() {
        let contract = generate(
            "multi-token",
            &params(json!({ "uri": "ipfs://x/{id}.json", "mintable": false })),
        )
        .unwrap();
        let source = &contract.source_code;
        assert_eq!(source.matches("function setURI(").count(), 1);
        assert!(source.contains("contract MyToken is ERC1155, Ownable {"));
        assert!(source.contains("ERC1155(\"ipfs://x/{id}.json\")"));
        assert_eq!(contract.contract_name, "MyToken");
    }

    #[test]
    fn erc1155_set_uri_is_last_member() {
        let contract = generate(
            "erc1155",
            &params(json!({ "uri": "u", "pausable": true, "supply": true })),
        )
        .unwrap();
        let source = &contract.source_code;
        assert!(source.find("function setURI(").unwrap() > source.find("function mintBatch(").unwrap());
        assert!(source.find("function setURI(").unwrap() > source.find("function unpause(").unwrap());
        assert_eq!(
            inheritance_of(source),
            vec!["ERC1155", "Ownable", "ERC1155Pausable", "ERC1155Supply"]
        );
    }

    #[test]
    fn unknown_template_fails_before_output() {
        let err = generate("nonexistent-id", &ParamValues::new()).unwrap_err();
        assert!(matches!(err, ContractError::UnknownTemplate { ref id } if id == "nonexistent-id"));
    }

    #[test]
    fn generation_is_idempotent() {
        let values = params(json!({ "name": "T", "symbol": "T", "premint": 5, "permit": true }));
        let first = generate("erc20", &values).unwrap();
        let second = generate("erc20", &values).unwrap();
        assert_eq!(first.source_code, second.source_code);
    }

    #[test]
    fn echoed_parameters_drop_unknown_keys_and_fill_defaults() {
        let contract = generate(
            "erc20",
            &params(json!({ "name": "T", "symbol": "T", "owner": "0xabc" })),
        )
        .unwrap();
        assert!(!contract.parameters.contains_key("owner"));
        assert_eq!(contract.parameters.get("premint"), Some(&json!(0)));
        assert_eq!(contract.parameters.get("mintable"), Some(&json!(false)));
    }

    #[test]
    fn names_are_substituted_verbatim() {
        let contract = generate(
            "erc20",
            &params(json!({ "name": "Tom's \"Coin\"", "symbol": "T" })),
        )
        .unwrap();
        assert!(contract.source_code.contains("ERC20(\"Tom's \"Coin\"\", \"T\")"));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let contract = generate("erc1155", &params(json!({ "uri": "u" }))).unwrap();
        let value = serde_json::to_value(&contract).unwrap();
        assert_eq!(value["language"], json!("solidity"));
        assert_eq!(value["templateId"], json!("erc1155"));
        assert!(value["sourceCode"].as_str().unwrap().starts_with(LICENSE_HEADER));
    }
}
