// Clawdesk Core — the engine behind the OpenClaw configuration editor.
//
// Layering:
//   atoms/   pure data types, constants, errors — no I/O
//   engine/  validation, model registry derivation, presets, the
//            file-backed store, the gateway contract, and the cache
//
// The presentation layer (forms, modals, localization) lives outside
// this crate and consumes it through `ConfigGateway` / `ConfigCache`.

pub mod atoms;
pub mod engine;

pub use atoms::error::{ConfigError, ConfigResult};
pub use atoms::types::*;
pub use engine::cache::{ConfigCache, Resource};
pub use engine::gateway::ConfigGateway;
pub use engine::presets::{find_preset, materialize, provider_presets};
pub use engine::registry::{
    compose_model_id, flatten_models, group_models_by_tier, has_api_key, parse_model_id,
    provider_display_name, FlatModel, ModelRef, TierBuckets,
};
pub use engine::store::{default_agents_defaults, FileConfigStore};
pub use engine::validation::{validate_agents_defaults, validate_provider, ValidationReport};
