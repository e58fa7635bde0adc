// Clawdesk Engine — Built-in provider presets
// Static templates that pre-fill the add-provider form for well-known
// operators. Presets are never persisted; `materialize` turns one into a
// real Provider with zero-filled costs and no credential.

use crate::atoms::types::{
    ApiType, ModelCost, ModelInfo, ModelTier, PresetModel, Provider, ProviderPreset,
};

fn seed(
    id: &str,
    name: &str,
    reasoning: bool,
    input: &[&str],
    context_window: u64,
    max_tokens: u64,
    tier: ModelTier,
) -> PresetModel {
    PresetModel {
        id: id.into(),
        name: name.into(),
        reasoning,
        input: input.iter().map(|s| s.to_string()).collect(),
        context_window,
        max_tokens,
        tier: Some(tier),
    }
}

/// The built-in catalog, in the order the form shows it.
pub fn provider_presets() -> Vec<ProviderPreset> {
    vec![
        ProviderPreset {
            id: "anthropic".into(),
            name: "Anthropic (Claude)".into(),
            api_type: ApiType::AnthropicMessages,
            supports_endpoint: false,
            default_endpoint: None,
            models: vec![
                seed("claude-haiku-4-5-20251001", "Claude Haiku 4.5", true, &["text", "image"], 200_000, 8_192, ModelTier::Fast),
                seed("claude-sonnet-4-5-20250929", "Claude Sonnet 4.5", true, &["text", "image"], 200_000, 16_000, ModelTier::Balanced),
                seed("claude-opus-4-6", "Claude Opus 4.6", true, &["text", "image"], 200_000, 16_000, ModelTier::Powerful),
            ],
        },
        ProviderPreset {
            id: "openai".into(),
            name: "OpenAI".into(),
            api_type: ApiType::OpenAiChat,
            supports_endpoint: false,
            default_endpoint: None,
            models: vec![
                seed("gpt-4o", "GPT-4o", false, &["text", "image"], 128_000, 4_096, ModelTier::Balanced),
                seed("gpt-4o-mini", "GPT-4o Mini", false, &["text", "image"], 128_000, 16_384, ModelTier::Fast),
                seed("o1-preview", "o1-preview", true, &["text"], 128_000, 32_768, ModelTier::Powerful),
            ],
        },
        ProviderPreset {
            id: "ollama".into(),
            name: "Ollama (Local)".into(),
            api_type: ApiType::OllamaChat,
            supports_endpoint: true,
            default_endpoint: Some("http://localhost:11434".into()),
            models: vec![
                seed("llama3.2", "Llama 3.2", false, &["text"], 128_000, 4_096, ModelTier::Fast),
                seed("qwen2.5-coder", "Qwen 2.5 Coder", false, &["text"], 32_768, 8_192, ModelTier::Balanced),
                seed("deepseek-coder", "DeepSeek Coder", false, &["text"], 16_384, 4_096, ModelTier::Fast),
            ],
        },
        ProviderPreset {
            id: "glm".into(),
            name: "Zhipu GLM".into(),
            api_type: ApiType::OpenAiChat,
            supports_endpoint: true,
            default_endpoint: Some("https://open.bigmodel.cn/api/paas/v4".into()),
            models: vec![
                seed("glm-4-plus", "GLM-4 Plus", true, &["text", "image"], 128_000, 8_192, ModelTier::Powerful),
                seed("glm-4-air", "GLM-4 Air", false, &["text"], 128_000, 4_096, ModelTier::Fast),
                seed("glm-4-flash", "GLM-4 Flash", false, &["text"], 128_000, 4_096, ModelTier::Fast),
            ],
        },
        ProviderPreset {
            id: "kimi".into(),
            name: "Kimi (Moonshot)".into(),
            api_type: ApiType::OpenAiChat,
            supports_endpoint: true,
            default_endpoint: Some("https://api.moonshot.cn/v1".into()),
            models: vec![
                seed("moonshot-v1-128k", "Kimi Moonshot v1 128k", false, &["text"], 128_000, 4_096, ModelTier::Balanced),
                seed("moonshot-v1-32k", "Kimi Moonshot v1 32k", false, &["text"], 32_000, 4_096, ModelTier::Balanced),
                seed("moonshot-v1-8k", "Kimi Moonshot v1 8k", false, &["text"], 8_000, 4_096, ModelTier::Fast),
            ],
        },
    ]
}

/// Look up a preset by its id.
pub fn find_preset(id: &str) -> Option<ProviderPreset> {
    provider_presets().into_iter().find(|p| p.id == id)
}

/// Turn a preset into a real provider ready for the add-provider flow.
/// The endpoint defaults to the preset's (empty when the operator has a
/// fixed one the backend knows), the credential is left empty for the
/// user, and every model cost is zero-filled — the catalog carries no
/// pricing on purpose.
pub fn materialize(preset: &ProviderPreset) -> Provider {
    Provider {
        base_url: preset.default_endpoint.clone().unwrap_or_default(),
        api_key: String::new(),
        api: preset.api_type.as_str().to_string(),
        models: preset
            .models
            .iter()
            .map(|m| ModelInfo {
                id: m.id.clone(),
                name: m.name.clone(),
                reasoning: m.reasoning,
                input: m.input.clone(),
                cost: ModelCost::unpriced(),
                context_window: m.context_window,
                max_tokens: m.max_tokens,
                tier: m.tier.map(|t| t.as_str().to_string()),
            })
            .collect(),
    }
}
