//! # Arcboard Contract Studio
//!
//! This crate turns a handful of form values into a ready-to-deploy Solidity
//! contract built from OpenZeppelin building blocks.
//!
//! ## Supported Templates
//!
//! - `erc20`: fungible token (mint, burn, pause, permit)
//! - `erc721`: non-fungible token (base URI, mint, burn, pause, enumerable)
//! - `erc1155`: multi-token (mint, burn, pause, supply tracking)
//!
//! ## Architecture
//!
//! ```text
//! Template id + values
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Registry   │  Static catalog lookup
//! │ (id → tmpl)  │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Schema + archetype rules
//! │  (values)    │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  Compose imports, bases,
//! │ (→ Solidity) │  constructor and members
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use arc_contracts::{ContractStudio, StudioConfig};
//!
//! let studio = ContractStudio::new(StudioConfig::default());
//! let contract = studio.generate("erc20", &values)?;
//! println!("{}", contract.source_code);
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostic;
pub mod registry;
pub mod template;
pub mod validate;
pub mod values;

use std::path::PathBuf;

use tracing::{debug, info};

pub use codegen::{GeneratedContract, Language};
pub use config::StudioConfig;
pub use diagnostic::ContractError;
pub use template::{Archetype, ContractTemplate, ParamKind, ParamValues, ParameterSpec};
pub use validate::ValidationResult;

/// Orchestrates the resolve → validate → generate pipeline.
pub struct ContractStudio {
    config: StudioConfig,
}

impl ContractStudio {
    /// Creates a studio with the given configuration.
    pub fn new(config: StudioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// All templates in catalog order.
    pub fn templates(&self) -> &'static [ContractTemplate] {
        registry::list_templates()
    }

    /// Resolves a template by registry id or archetype name.
    pub fn template(&self, id: &str) -> Result<&'static ContractTemplate, ContractError> {
        registry::get_template(id).ok_or_else(|| ContractError::TemplateNotFound {
            id: id.to_string(),
        })
    }

    /// Validates `values` for template `id`.
    ///
    /// In strict identifier mode the contract name must also be a valid
    /// Solidity identifier.
    pub fn validate(&self, id: &str, values: &ParamValues) -> Result<ValidationResult, ContractError> {
        let template = self.template(id)?;
        let mut result = validate::validate_parameters(template, values);

        if self.config.strict_identifiers {
            let identifier_errors = validate::validate_identifiers(template, values);
            if !identifier_errors.is_empty() {
                result.errors.extend(identifier_errors);
                result.valid = false;
            }
        }

        Ok(result)
    }

    /// Generates a contract.
    ///
    /// This runs the full pipeline:
    /// 1. Resolve the template (not found is reported once, here)
    /// 2. Validate the values, collecting every problem
    /// 3. Generate the source
    pub fn generate(&self, id: &str, values: &ParamValues) -> Result<GeneratedContract, ContractError> {
        // Phase 1: Resolve
        let template = self.template(id)?;

        // Phase 2: Validate
        self.validate(template.id, values)?.into_result()?;

        // Phase 3: Generate
        let contract = codegen::generate_for(template, values);
        info!(
            template = template.id,
            contract = %contract.contract_name,
            bytes = contract.source_code.len(),
            "generated contract"
        );
        Ok(contract)
    }

    /// Writes a generated contract into the configured output directory and
    /// returns the file path.
    pub fn write_contract(&self, contract: &GeneratedContract) -> Result<PathBuf, ContractError> {
        if self.config.out_dir.as_os_str().is_empty() {
            return Err(ContractError::Config {
                message: "output directory is not set".to_string(),
            });
        }

        std::fs::create_dir_all(&self.config.out_dir)
            .map_err(|e| ContractError::io(&self.config.out_dir, e.to_string()))?;

        let path = self.config.out_dir.join(contract.file_name());
        std::fs::write(&path, &contract.source_code)
            .map_err(|e| ContractError::io(&path, e.to_string()))?;

        debug!(path = %path.display(), "wrote contract");
        Ok(path)
    }
}

impl Default for ContractStudio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}
