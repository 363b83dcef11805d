//! Contract studio error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while resolving, validating or generating a contract.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum ContractError {
    // =========================================================================
    // Request Errors
    // =========================================================================
    #[error("Malformed request: {message}")]
    #[diagnostic(
        code(arcboard::request::malformed),
        help("Send a JSON object of the form {{ \"templateId\": \"erc20\", \"parameters\": {{ ... }} }}")
    )]
    MalformedRequest {
        message: String,
    },

    // =========================================================================
    // Registry Errors
    // =========================================================================
    #[error("Template '{id}' not found")]
    #[diagnostic(
        code(arcboard::registry::not_found),
        help("Available templates: erc20, erc721, erc1155")
    )]
    TemplateNotFound {
        id: String,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid parameters: {}", errors.join("; "))]
    #[diagnostic(code(arcboard::validate::invalid_parameters))]
    InvalidParameters {
        errors: Vec<String>,
    },

    // =========================================================================
    // Code Generation Errors
    // =========================================================================
    #[error("Unknown template: {id}")]
    #[diagnostic(code(arcboard::codegen::unknown_template))]
    UnknownTemplate {
        id: String,
    },

    // =========================================================================
    // IO / Configuration Errors
    // =========================================================================
    #[error("Failed to write file '{path}': {message}")]
    #[diagnostic(code(arcboard::io::write_error))]
    IoError {
        path: PathBuf,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(arcboard::config::invalid))]
    Config {
        message: String,
    },
}

impl ContractError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code, used in HTTP error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedRequest { .. } => "INVALID_REQUEST",
            Self::TemplateNotFound { .. } => "TEMPLATE_NOT_FOUND",
            Self::InvalidParameters { .. } => "VALIDATION_ERROR",
            Self::UnknownTemplate { .. } => "UNKNOWN_TEMPLATE",
            Self::IoError { .. } | Self::Config { .. } => "GENERATION_ERROR",
        }
    }
}
