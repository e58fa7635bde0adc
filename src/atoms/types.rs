// ── Clawdesk Atoms: Pure Data Types ───────────────────────────────────────────
// All plain struct/enum definitions with no logic.
// Atoms layer rule: no I/O, no side effects, no imports from engine/.
//
// Wire shape mirrors openclaw.json exactly: camelCase keys, optional
// sections omitted when absent so an untouched file round-trips cleanly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Configuration tree ────────────────────────────────────────────────────────

/// The full openclaw.json document.
///
/// Only `models` and `agents` are edited by this crate. The remaining
/// sections are deserialized as raw JSON and written back verbatim — the
/// editor must never alter data it does not own, even keys it has never
/// seen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenClawConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wizard: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<ModelsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<AgentsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<serde_json::Value>,
}

/// The `models` section: merge mode plus the provider map.
/// BTreeMap keeps provider iteration order stable across reads, which in
/// turn keeps every derived selection list deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    pub mode: String,
    pub providers: BTreeMap<String, Provider>,
}

// ── Providers ─────────────────────────────────────────────────────────────────

/// One configured model-serving endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub base_url: String,
    /// Missing key deserializes as "" so validation can flag it instead of
    /// the whole read failing.
    #[serde(default)]
    pub api_key: String,
    /// Wire-protocol kind. Kept as a raw string (see `ApiType` for the
    /// known set) so a config written by a newer OpenClaw still loads.
    pub api: String,
    pub models: Vec<ModelInfo>,
}

/// The closed set of wire protocols the editor knows how to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiType {
    #[serde(rename = "anthropic-messages")]
    AnthropicMessages,
    #[serde(rename = "openai-chat")]
    OpenAiChat,
    #[serde(rename = "ollama-chat")]
    OllamaChat,
}

impl ApiType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiType::AnthropicMessages => "anthropic-messages",
            ApiType::OpenAiChat => "openai-chat",
            ApiType::OllamaChat => "ollama-chat",
        }
    }
}

/// One model offered by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub reasoning: bool,
    /// Supported input modalities, e.g. "text", "image".
    pub input: Vec<String>,
    pub cost: ModelCost,
    pub context_window: u64,
    pub max_tokens: u64,
    /// Coarse capability class. Raw string: anything outside the known
    /// tiers (see `ModelTier`) buckets as "other" during grouping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// Per-million-token pricing in USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCost {
    pub input: f64,
    pub output: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_read: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_write: Option<f64>,
}

impl ModelCost {
    /// The zero-filled cost used when materializing presets — pricing is
    /// operator-specific and must be entered by the user.
    pub fn unpriced() -> Self {
        ModelCost { input: 0.0, output: 0.0, cache_read: None, cache_write: None }
    }
}

/// The three named tiers. "other" is not a tier — it is the grouping
/// bucket for models with no tier or an unrecognized one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Fast,
    Balanced,
    Powerful,
}

impl ModelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Fast => "fast",
            ModelTier::Balanced => "balanced",
            ModelTier::Powerful => "powerful",
        }
    }
}

// ── Agents ────────────────────────────────────────────────────────────────────

/// The `agents` section wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsConfig {
    pub defaults: AgentsDefaults,
}

/// Singleton record of default agent behavior. Loaded and saved as a
/// whole — there is no per-field persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelSelection>,
    #[serde(default)]
    pub models: BTreeMap<String, ModelAlias>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subagents: Option<SubagentsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching: Option<CachingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<TimeoutConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compaction: Option<CompactionConfig>,
}

/// Default model per tier. Values are composite references
/// ("providerId/modelId"); they are NOT resolved against the provider map
/// at validation time — a reference may be entered before its provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSelection {
    pub primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balanced: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powerful: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelAlias {
    pub alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubagentsConfig {
    pub max_concurrent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachingConfig {
    pub enabled: bool,
    pub max_cache_size: String,
}

/// Milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub request: u64,
    pub idle: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub backoff: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompactionConfig {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

// ── Presets ───────────────────────────────────────────────────────────────────

/// Built-in template for a well-known operator. Never persisted — only
/// materialized into a real `Provider` to seed the add-provider form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPreset {
    pub id: String,
    pub name: String,
    pub api_type: ApiType,
    /// Whether the user may override the endpoint URL.
    pub supports_endpoint: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_endpoint: Option<String>,
    pub models: Vec<PresetModel>,
}

/// A seed model: `ModelInfo` minus cost. Pricing is operator-specific, so
/// the catalog never declares it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetModel {
    pub id: String,
    pub name: String,
    pub reasoning: bool,
    pub input: Vec<String>,
    pub context_window: u64,
    pub max_tokens: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<ModelTier>,
}
