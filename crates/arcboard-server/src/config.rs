//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! | --- | --- |
//! | `ARCBOARD_BIND` | `0.0.0.0:3000` |
//! | `ARCBOARD_LOG_JSON` | `false` |
//! | `ARCBOARD_STRICT_IDENTIFIERS` | `false` |
//! | `ARCBOARD_EXPOSE_ERROR_DETAILS` | `false` |

use std::env;

use arc_contracts::StudioConfig;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
    /// Reject symbols that are not valid Solidity identifiers.
    pub strict_identifiers: bool,
    /// Include internal error text in 500 responses. Keep off in production.
    pub expose_error_details: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            log_json: false,
            strict_identifiers: false,
            expose_error_details: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var("ARCBOARD_BIND").unwrap_or(defaults.bind_addr),
            log_json: env_bool("ARCBOARD_LOG_JSON", defaults.log_json),
            strict_identifiers: env_bool("ARCBOARD_STRICT_IDENTIFIERS", defaults.strict_identifiers),
            expose_error_details: env_bool(
                "ARCBOARD_EXPOSE_ERROR_DETAILS",
                defaults.expose_error_details,
            ),
        }
    }

    pub fn studio_config(&self) -> StudioConfig {
        StudioConfig {
            strict_identifiers: self.strict_identifiers,
            ..StudioConfig::default()
        }
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
