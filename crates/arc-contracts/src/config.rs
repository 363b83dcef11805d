//! Contract studio configuration.

use std::path::PathBuf;

/// Configuration for the contract studio.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Directory `.sol` files are written to.
    pub out_dir: PathBuf,

    /// Reject symbols that are not valid Solidity identifiers.
    ///
    /// Off by default: the symbol is substituted verbatim as the contract
    /// name, and callers are trusted to supply a usable identifier.
    pub strict_identifiers: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("contracts"),
            strict_identifiers: false,
        }
    }
}
