// Clawdesk Engine — Configuration editing core
// Validation, registry derivation, and presets are pure; the store and
// cache are the only pieces that touch the filesystem or hold state.

pub mod cache;
pub mod gateway;
pub mod presets;
pub mod registry;
pub mod store;
pub mod validation;
