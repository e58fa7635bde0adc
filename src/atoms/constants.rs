// ── Clawdesk Atoms: Constants ─────────────────────────────────────────────────
// All named constants for the crate live here.
// Rationale: collecting constants in one place eliminates magic strings,
// makes auditing easier, and keeps every layer's code self-documenting.

// ── Config file location ──────────────────────────────────────────────────────
// The OpenClaw CLI owns this file; we edit it in place. Changing either
// value would make existing installs unreachable. Treat as stable.
pub const CONFIG_DIR_NAME: &str = ".openclaw";
pub const CONFIG_FILE_NAME: &str = "openclaw.json";
pub const BACKUP_DIR_NAME: &str = "backups";

// ── Provider map defaults ─────────────────────────────────────────────────────
// Mode written when the editor creates the `models` section from scratch.
pub const MODELS_MODE_MERGE: &str = "merge";

/// The literal the OpenClaw wizard writes before the user supplies a real
/// key. A provider carrying it is treated as having NO key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Sentinel provider id produced when a composite model reference has no
/// separator and the provider half cannot be recovered.
pub const UNKNOWN_PROVIDER_ID: &str = "unknown";

// ── Fresh AgentsDefaults record ───────────────────────────────────────────────
// Seeded when saving defaults into a config that has no `agents` section.
pub const DEFAULT_MAX_CONCURRENT: u32 = 6;
pub const DEFAULT_SUBAGENT_MAX_CONCURRENT: u32 = 12;
