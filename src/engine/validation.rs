// Clawdesk Engine — Candidate validation
// Pure, non-throwing checks run before a provider or agents-defaults
// record is persisted. Every applicable rule runs — no short-circuit —
// so the form can surface all problems in one pass.

use crate::atoms::types::{AgentsDefaults, Provider};
use serde::{Deserialize, Serialize};

/// Outcome of a validation pass. `valid` is true exactly when `errors`
/// is empty; the messages keep the order their rules are declared in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        ValidationReport { valid: errors.is_empty(), errors }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Check a candidate provider against the business rules, in fixed order:
/// base URL, API key, API type, at least one model.
pub fn validate_provider(provider: &Provider) -> ValidationReport {
    let mut errors = Vec::new();

    if is_blank(&provider.base_url) {
        errors.push("Base URL must not be empty".to_string());
    }
    if is_blank(&provider.api_key) {
        errors.push("API key must not be empty".to_string());
    }
    if is_blank(&provider.api) {
        errors.push("API type must not be empty".to_string());
    }
    if provider.models.is_empty() {
        errors.push("At least one model must be configured".to_string());
    }

    ValidationReport::from_errors(errors)
}

/// Check a candidate agents-defaults record.
///
/// Tier references (`primary`/`fast`/`balanced`/`powerful`) are NOT
/// resolved against the provider map here — a reference may be entered
/// before its provider exists. Dangling references are therefore accepted.
pub fn validate_agents_defaults(defaults: &AgentsDefaults) -> ValidationReport {
    let mut errors = Vec::new();

    let primary_ok = defaults
        .model
        .as_ref()
        .map(|m| !is_blank(&m.primary))
        .unwrap_or(false);
    if !primary_ok {
        errors.push("Primary model must not be empty".to_string());
    }

    if let Some(max) = defaults.max_concurrent {
        if max < 1 {
            errors.push("Max concurrent must be at least 1".to_string());
        }
    }

    if let Some(sub) = &defaults.subagents {
        if sub.max_concurrent < 1 {
            errors.push("Subagent max concurrent must be at least 1".to_string());
        }
    }

    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::types::{ModelCost, ModelInfo, ModelSelection, SubagentsConfig};

    fn make_model(id: &str) -> ModelInfo {
        ModelInfo {
            id: id.into(),
            name: id.into(),
            reasoning: false,
            input: vec!["text".into()],
            cost: ModelCost::unpriced(),
            context_window: 128_000,
            max_tokens: 4096,
            tier: None,
        }
    }

    #[test]
    fn test_provider_all_rules_fail() {
        let provider = Provider {
            base_url: "".into(),
            api_key: "".into(),
            api: "".into(),
            models: vec![],
        };
        let report = validate_provider(&provider);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 4);
    }

    #[test]
    fn test_provider_well_formed_passes() {
        let provider = Provider {
            base_url: "https://x".into(),
            api_key: "sk-1".into(),
            api: "openai-chat".into(),
            models: vec![make_model("m")],
        };
        let report = validate_provider(&provider);
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_provider_whitespace_is_blank() {
        let provider = Provider {
            base_url: "   ".into(),
            api_key: "sk-1".into(),
            api: "openai-chat".into(),
            models: vec![make_model("m")],
        };
        let report = validate_provider(&provider);
        assert_eq!(report.errors, vec!["Base URL must not be empty".to_string()]);
    }

    fn defaults_with_primary(primary: &str) -> AgentsDefaults {
        AgentsDefaults {
            model: Some(ModelSelection {
                primary: primary.into(),
                fast: None,
                balanced: None,
                powerful: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_max_concurrent_bounds() {
        let mut defaults = defaults_with_primary("x");
        defaults.max_concurrent = Some(0);
        let report = validate_agents_defaults(&defaults);
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Max concurrent must be at least 1".to_string()]);

        defaults.max_concurrent = Some(1);
        assert!(validate_agents_defaults(&defaults).valid);
    }

    #[test]
    fn test_defaults_missing_model_is_missing_primary() {
        let report = validate_agents_defaults(&AgentsDefaults::default());
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Primary model must not be empty".to_string()]);
    }

    #[test]
    fn test_defaults_subagent_bound() {
        let mut defaults = defaults_with_primary("anthropic/claude");
        defaults.subagents = Some(SubagentsConfig { max_concurrent: 0 });
        let report = validate_agents_defaults(&defaults);
        assert_eq!(
            report.errors,
            vec!["Subagent max concurrent must be at least 1".to_string()]
        );
    }

    #[test]
    fn test_defaults_dangling_tier_reference_accepted() {
        let mut defaults = defaults_with_primary("anthropic/claude");
        defaults.model.as_mut().unwrap().fast = Some("nonexistent/model".into());
        assert!(validate_agents_defaults(&defaults).valid);
    }
}
