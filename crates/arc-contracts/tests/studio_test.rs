use serde_json::{json, Value};

use arc_contracts::codegen;
use arc_contracts::registry;
use arc_contracts::{ContractError, ContractStudio, ParamValues, StudioConfig};

fn params(value: Value) -> ParamValues {
    serde_json::from_value(value).unwrap()
}

/// Schema defaults plus placeholders for every required field.
fn default_values(template_id: &str) -> ParamValues {
    let template = registry::get_template(template_id).unwrap();
    let mut values = ParamValues::new();
    for spec in template.parameters {
        if let Some(default) = spec.default_value {
            values.insert(spec.name.to_string(), default.to_json());
        } else if spec.required {
            values.insert(
                spec.name.to_string(),
                Value::String(spec.placeholder.unwrap().to_string()),
            );
        }
    }
    values
}

#[test]
fn defaults_generate_base_import_and_name_once() {
    let cases = [
        ("erc20", "@openzeppelin/contracts/token/ERC20/ERC20.sol", "contract MTK "),
        ("erc721", "@openzeppelin/contracts/token/ERC721/ERC721.sol", "contract MNFT "),
        ("erc1155", "@openzeppelin/contracts/token/ERC1155/ERC1155.sol", "contract MyToken "),
    ];

    let studio = ContractStudio::default();
    for (id, import, declaration) in cases {
        let values = default_values(id);
        assert!(studio.validate(id, &values).unwrap().valid, "{id}");

        let contract = studio.generate(id, &values).unwrap();
        let import_line = format!("import \"{}\";", import);
        assert_eq!(contract.source_code.matches(&import_line).count(), 1, "{id}");
        assert_eq!(contract.source_code.matches(declaration).count(), 1, "{id}");
    }
}

#[test]
fn studio_reports_not_found_before_validation() {
    let studio = ContractStudio::default();
    let err = studio.generate("erc4626", &ParamValues::new()).unwrap_err();
    assert!(matches!(err, ContractError::TemplateNotFound { .. }));
    assert_eq!(err.code(), "TEMPLATE_NOT_FOUND");
}

#[test]
fn raw_generator_reports_unknown_template() {
    let err = codegen::generate("nonexistent-id", &ParamValues::new()).unwrap_err();
    assert!(matches!(err, ContractError::UnknownTemplate { .. }));
}

#[test]
fn studio_refuses_to_generate_invalid_parameters() {
    let studio = ContractStudio::default();
    let err = studio
        .generate("erc20", &params(json!({ "name": "T", "symbol": "T", "premint": -5 })))
        .unwrap_err();
    match err {
        ContractError::InvalidParameters { errors } => {
            assert_eq!(errors, vec!["Premint must be a non-negative number".to_string()]);
        }
        other => panic!("expected InvalidParameters, got {other:?}"),
    }
}

#[test]
fn archetype_names_resolve_to_registry_templates() {
    let studio = ContractStudio::default();
    let contract = studio
        .generate("fungible-token", &params(json!({ "name": "T", "symbol": "T" })))
        .unwrap();
    assert_eq!(contract.template_id, "erc20");
}

#[test]
fn strict_identifiers_reject_symbol_with_spaces() {
    let lenient = ContractStudio::default();
    let values = params(json!({ "name": "My Token", "symbol": "My Token" }));
    let contract = lenient.generate("erc20", &values).unwrap();
    assert!(contract.source_code.contains("contract My Token is ERC20 {"));

    let strict = ContractStudio::new(StudioConfig {
        strict_identifiers: true,
        ..StudioConfig::default()
    });
    let result = strict.validate("erc20", &values).unwrap();
    assert!(!result.valid);
    assert_eq!(result.errors, vec!["Symbol must be a valid Solidity identifier".to_string()]);
    assert!(strict.generate("erc20", &values).is_err());
}

#[test]
fn numeric_strings_are_accepted_for_premint() {
    let studio = ContractStudio::default();
    let contract = studio
        .generate(
            "erc20",
            &params(json!({ "name": "T", "symbol": "T", "premint": "250", "mintable": "true" })),
        )
        .unwrap();
    assert!(contract.source_code.contains("_mint(msg.sender, 250 * 10 ** decimals());"));
    assert!(contract.source_code.contains("function mint("));
}

#[test]
fn write_contract_uses_contract_name() {
    let dir = tempfile::TempDir::new().unwrap();
    let studio = ContractStudio::new(StudioConfig {
        out_dir: dir.path().join("out"),
        ..StudioConfig::default()
    });

    let contract = studio
        .generate("erc721", &params(json!({ "name": "Apes", "symbol": "APE" })))
        .unwrap();
    let path = studio.write_contract(&contract).unwrap();

    assert_eq!(path, dir.path().join("out").join("APE.sol"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), contract.source_code);
}

#[test]
fn write_contract_requires_output_directory() {
    let studio = ContractStudio::new(StudioConfig {
        out_dir: std::path::PathBuf::new(),
        ..StudioConfig::default()
    });
    let contract = studio
        .generate("erc1155", &params(json!({ "uri": "ipfs://x/{id}.json" })))
        .unwrap();

    let err = studio.write_contract(&contract).unwrap_err();
    assert!(matches!(err, ContractError::Config { .. }));
}

#[test]
fn full_erc20_source_layout() {
    let studio = ContractStudio::default();
    let contract = studio
        .generate(
            "erc20",
            &params(json!({ "name": "My Token", "symbol": "MTK", "premint": 1000, "mintable": true })),
        )
        .unwrap();

    let expected = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.20;

import "@openzeppelin/contracts/token/ERC20/ERC20.sol";
import "@openzeppelin/contracts/access/Ownable.sol";

contract MTK is ERC20, Ownable {
    constructor()
        ERC20("My Token", "MTK")
        Ownable(msg.sender)
    {
        _mint(msg.sender, 1000 * 10 ** decimals());
    }

    function mint(address to, uint256 amount) public onlyOwner {
        _mint(to, amount);
    }
}
"#;
    assert_eq!(contract.source_code, expected);
}
