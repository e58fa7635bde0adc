// Clawdesk Engine — Model registry derivation
// Pure functions over the provider map: composite model ids, the
// flattened selection list, tier grouping, and display helpers.
// Recomputed on every read — nothing here caches or mutates.

use crate::atoms::constants::{PLACEHOLDER_API_KEY, UNKNOWN_PROVIDER_ID};
use crate::atoms::types::{ModelInfo, Provider};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

// ── Composite model references ────────────────────────────────────────────────

/// A parsed "providerId/modelId" reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRef {
    pub provider_id: String,
    pub model_id: String,
}

/// Build the composite reference used to address a model across the whole
/// configuration. Total — any inputs produce a valid reference.
pub fn compose_model_id(provider_id: &str, model_id: &str) -> String {
    format!("{}/{}", provider_id, model_id)
}

/// Split a composite reference at the FIRST `/`. Model ids may themselves
/// be namespaced paths ("meta/llama-3"), so everything after the first
/// separator belongs to the model half.
///
/// A reference with no separator degrades silently: the provider half is
/// the "unknown" sentinel and the input is kept whole as the model id.
/// `compose_model_id(parse(x))` therefore round-trips only when `x`
/// contained a separator.
pub fn parse_model_id(full_id: &str) -> ModelRef {
    match full_id.split_once('/') {
        Some((provider_id, model_id)) => ModelRef {
            provider_id: provider_id.to_string(),
            model_id: model_id.to_string(),
        },
        None => ModelRef {
            provider_id: UNKNOWN_PROVIDER_ID.to_string(),
            model_id: full_id.to_string(),
        },
    }
}

// ── Flattened selection list ──────────────────────────────────────────────────

/// One row of the flattened model list that backs every selection control.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatModel {
    pub full_id: String,
    pub provider_id: String,
    pub model: ModelInfo,
}

/// Every model addressable in the configuration, in provider-map order
/// then stored model order. Deterministic: the map is ordered and model
/// sequences keep their file order.
pub fn flatten_models(providers: &BTreeMap<String, Provider>) -> Vec<FlatModel> {
    let mut flat = Vec::new();
    for (provider_id, provider) in providers {
        for model in &provider.models {
            flat.push(FlatModel {
                full_id: compose_model_id(provider_id, &model.id),
                provider_id: provider_id.clone(),
                model: model.clone(),
            });
        }
    }
    flat
}

// ── Tier grouping ─────────────────────────────────────────────────────────────

/// The fixed four-bucket partition used by tier pickers. All buckets are
/// always present; each keeps its models in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TierBuckets {
    pub fast: Vec<ModelInfo>,
    pub balanced: Vec<ModelInfo>,
    pub powerful: Vec<ModelInfo>,
    pub other: Vec<ModelInfo>,
}

/// Partition models by tier. A model with no tier, or a tier outside the
/// three known values, lands in `other`. Stable: relative order within
/// each bucket matches the input.
pub fn group_models_by_tier(models: &[ModelInfo]) -> TierBuckets {
    let mut buckets = TierBuckets::default();
    for model in models {
        let bucket = match model.tier.as_deref() {
            Some("fast") => &mut buckets.fast,
            Some("balanced") => &mut buckets.balanced,
            Some("powerful") => &mut buckets.powerful,
            _ => &mut buckets.other,
        };
        bucket.push(model.clone());
    }
    buckets
}

// ── Display helpers ───────────────────────────────────────────────────────────

// Captures the name text before a parenthesized suffix, e.g.
// "Claude Sonnet (latest)" → "Claude Sonnet".
static NAME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\(").expect("valid regex"));

/// Cosmetic label for a provider: the prefix of the first model name that
/// carries a parenthesized suffix, else the id with its first character
/// upper-cased.
///
/// Heuristic only — never use this as a key or for lookup.
pub fn provider_display_name(provider_id: &str, provider: &Provider) -> String {
    for model in &provider.models {
        if let Some(caps) = NAME_PREFIX.captures(&model.name) {
            return caps[1].trim().to_string();
        }
    }

    let mut chars = provider_id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Whether the provider has a usable credential: non-empty and not the
/// wizard placeholder.
pub fn has_api_key(provider: &Provider) -> bool {
    !provider.api_key.is_empty() && provider.api_key != PLACEHOLDER_API_KEY
}
