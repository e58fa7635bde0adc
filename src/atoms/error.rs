// ── Clawdesk Atoms: Error Types ───────────────────────────────────────────────
// Single canonical error enum for the crate, built with `thiserror`.
//
// Design rules:
//   • Variants are coarse-grained by failure class (transport, lookup…).
//   • The `#[from]` attribute wires std/external error conversions.
//   • `ConfigError` → `String` conversion is provided so UI command
//     boundaries (`Result<T, String>`) can call `.map_err(|e| e.to_string())`
//     without boilerplate.
//   • Validation problems are NEVER errors — they travel as data in a
//     `ValidationReport` so the UI can show every message at once.
//   • No variant carries secret material (API keys) in its message.

use serde::Serialize;
use thiserror::Error;

// ── Primary error enum ────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem or OS-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The home directory (and thus the config path) cannot be resolved.
    #[error("Configuration path not found")]
    ConfigPathNotFound,

    /// An operation needed an existing config file and there is none.
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// A backup file referenced by restore does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Update/delete referenced a provider id that is not configured.
    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),

    /// Add referenced a provider id that is already configured.
    #[error("Provider '{0}' already exists")]
    ProviderExists(String),
}

// ── Convenience alias ─────────────────────────────────────────────────────────

/// All fallible operations in this crate return this type.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ── Conversion: ConfigError → String ──────────────────────────────────────────
// Lets UI command functions call `.map_err(ConfigError::into)` directly.

impl From<ConfigError> for String {
    fn from(e: ConfigError) -> Self {
        e.to_string()
    }
}

// ── Serialize for IPC boundaries ──────────────────────────────────────────────
// Errors cross the command boundary as their display string; structured
// fields would leak internal shape into the frontend for no benefit.

impl Serialize for ConfigError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
