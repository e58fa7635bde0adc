// Clawdesk Engine — File-backed configuration store
// Reads and writes ~/.openclaw/openclaw.json in place. The file is owned
// by the OpenClaw CLI: writes merge section-by-section so everything the
// editor does not manage survives untouched, and reads tolerate the JSON5
// features (comments, trailing commas) the CLI is happy to emit.

use crate::atoms::constants::{
    BACKUP_DIR_NAME, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_MAX_CONCURRENT,
    DEFAULT_SUBAGENT_MAX_CONCURRENT, MODELS_MODE_MERGE,
};
use crate::atoms::error::{ConfigError, ConfigResult};
use crate::atoms::types::{
    AgentsConfig, AgentsDefaults, ModelSelection, ModelsConfig, OpenClawConfig, Provider,
    SubagentsConfig,
};
use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

// ── JSON5 tolerance ───────────────────────────────────────────────────────────

/// Strip JSON5 features (line/block comments, trailing commas) so
/// serde_json can parse. Unquoted keys are not handled — OpenClaw does
/// not emit them.
fn sanitize_json5(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    let mut in_string = false;

    while i < len {
        if in_string {
            out.push(chars[i]);
            if chars[i] == '\\' && i + 1 < len {
                i += 1;
                out.push(chars[i]);
            } else if chars[i] == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        // Line comment: skip to end of line
        if i + 1 < len && chars[i] == '/' && chars[i + 1] == '/' {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        // Block comment: skip to closing */
        if i + 1 < len && chars[i] == '/' && chars[i + 1] == '*' {
            i += 2;
            while i + 1 < len && !(chars[i] == '*' && chars[i + 1] == '/') {
                i += 1;
            }
            i = (i + 2).min(len);
            continue;
        }

        // Trailing comma: drop when the next non-whitespace is } or ]
        if chars[i] == ',' {
            let mut j = i + 1;
            while j < len && chars[j].is_whitespace() {
                j += 1;
            }
            if j < len && (chars[j] == '}' || chars[j] == ']') {
                i += 1;
                continue;
            }
        }

        if chars[i] == '"' {
            in_string = true;
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

// ── Store ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    config_path: PathBuf,
}

impl FileConfigStore {
    /// Store over the standard location, `~/.openclaw/openclaw.json`.
    pub fn new() -> ConfigResult<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::ConfigPathNotFound)?;
        Ok(Self::with_path(
            home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        ))
    }

    /// Store over an explicit file path. Tests and portable installs use
    /// this to avoid touching the real home directory.
    pub fn with_path(config_path: PathBuf) -> Self {
        FileConfigStore { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    // ── Whole-document I/O ────────────────────────────────────────────────

    /// Load the config. A missing file is not an error — it reads as the
    /// empty default so a fresh install can be edited immediately.
    pub fn read(&self) -> ConfigResult<OpenClawConfig> {
        if !self.exists() {
            return Ok(OpenClawConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)?;

        // Fast path: strict JSON.
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(strict_err) => {
                // Fall back to JSON5-sanitized parsing.
                let sanitized = sanitize_json5(&content);
                match serde_json::from_str(&sanitized) {
                    Ok(config) => {
                        info!("[store] Parsed {} after JSON5 sanitization", self.config_path.display());
                        Ok(config)
                    }
                    Err(_) => Err(ConfigError::Serialization(strict_err)),
                }
            }
        }
    }

    /// Persist the config. Sections present in `config` replace the
    /// on-disk ones; sections absent from `config` keep whatever the file
    /// already holds. The editor can therefore save a partial view
    /// without clobbering data other tools wrote.
    pub fn write(&self, config: &OpenClawConfig) -> ConfigResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let existing = if self.exists() {
            self.read()?
        } else {
            OpenClawConfig::default()
        };
        let merged = merge_configs(existing, config.clone());

        let content = serde_json::to_string_pretty(&merged)?;
        fs::write(&self.config_path, content)?;
        Ok(())
    }

    // ── Backup / restore ──────────────────────────────────────────────────

    /// Copy the current file into the backups directory with a timestamped
    /// name. Fails when there is nothing to back up.
    pub fn backup(&self) -> ConfigResult<PathBuf> {
        if !self.exists() {
            return Err(ConfigError::ConfigNotFound);
        }

        let backup_dir = self
            .config_path
            .parent()
            .ok_or(ConfigError::ConfigPathNotFound)?
            .join(BACKUP_DIR_NAME);
        fs::create_dir_all(&backup_dir)?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let backup_path = backup_dir.join(format!("openclaw_backup_{}.json", timestamp));
        fs::copy(&self.config_path, &backup_path)?;

        info!("[store] Backed up config to {}", backup_path.display());
        Ok(backup_path)
    }

    /// Overwrite the config file with a previously created backup.
    pub fn restore(&self, backup_path: &Path) -> ConfigResult<()> {
        if !backup_path.exists() {
            return Err(ConfigError::FileNotFound(backup_path.display().to_string()));
        }
        fs::copy(backup_path, &self.config_path)?;
        info!("[store] Restored config from {}", backup_path.display());
        Ok(())
    }

    // ── Provider entity operations ────────────────────────────────────────

    /// The provider map, empty when the `models` section is absent.
    pub fn providers(&self) -> ConfigResult<BTreeMap<String, Provider>> {
        let config = self.read()?;
        Ok(config.models.map(|m| m.providers).unwrap_or_default())
    }

    /// Insert a new provider. The id must be free.
    pub fn add_provider(&self, id: &str, provider: Provider) -> ConfigResult<()> {
        let mut config = self.read()?;
        let models = config.models.get_or_insert_with(|| ModelsConfig {
            mode: MODELS_MODE_MERGE.to_string(),
            providers: BTreeMap::new(),
        });

        if models.providers.contains_key(id) {
            return Err(ConfigError::ProviderExists(id.to_string()));
        }
        models.providers.insert(id.to_string(), provider);
        self.write(&config)?;

        info!("[store] Provider '{}' added", id);
        Ok(())
    }

    /// Replace an existing provider. The id must already be configured.
    pub fn update_provider(&self, id: &str, provider: Provider) -> ConfigResult<()> {
        let mut config = self.read()?;
        let models = config
            .models
            .as_mut()
            .ok_or_else(|| ConfigError::ProviderNotFound(id.to_string()))?;

        if !models.providers.contains_key(id) {
            return Err(ConfigError::ProviderNotFound(id.to_string()));
        }
        models.providers.insert(id.to_string(), provider);
        self.write(&config)?;

        info!("[store] Provider '{}' updated", id);
        Ok(())
    }

    /// Remove a provider. The id must already be configured.
    pub fn delete_provider(&self, id: &str) -> ConfigResult<()> {
        let mut config = self.read()?;
        let removed = config
            .models
            .as_mut()
            .map(|m| m.providers.remove(id).is_some())
            .unwrap_or(false);

        if !removed {
            return Err(ConfigError::ProviderNotFound(id.to_string()));
        }
        self.write(&config)?;

        info!("[store] Provider '{}' deleted", id);
        Ok(())
    }

    // ── Agents-defaults entity operations ─────────────────────────────────

    /// The agents-defaults record, `None` when the section is absent.
    pub fn agents_defaults(&self) -> ConfigResult<Option<AgentsDefaults>> {
        let config = self.read()?;
        Ok(config.agents.map(|a| a.defaults))
    }

    /// The agents-defaults record, or the standard seed when the config
    /// has none yet. The agents panel edits this on a fresh install.
    pub fn agents_defaults_or_seed(&self) -> ConfigResult<AgentsDefaults> {
        Ok(self.agents_defaults()?.unwrap_or_else(default_agents_defaults))
    }

    /// Replace the agents-defaults record wholesale, creating the `agents`
    /// section when the file has none.
    pub fn save_agents_defaults(&self, defaults: AgentsDefaults) -> ConfigResult<()> {
        let mut config = self.read()?;
        match config.agents.as_mut() {
            Some(agents) => agents.defaults = defaults,
            None => config.agents = Some(AgentsConfig { defaults }),
        }
        self.write(&config)?;

        info!("[store] Agents defaults saved");
        Ok(())
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        match Self::new() {
            Ok(store) => store,
            Err(e) => {
                // No home directory: fall back to a relative path so the
                // store is still constructible; every read/write will
                // surface a proper error.
                warn!("[store] {} — using relative config path", e);
                Self::with_path(PathBuf::from(CONFIG_FILE_NAME))
            }
        }
    }
}

/// Section-wise merge: `new` wins where it has a value, `existing` fills
/// the gaps. Mirrors how the OpenClaw wizard itself updates the file.
fn merge_configs(existing: OpenClawConfig, new: OpenClawConfig) -> OpenClawConfig {
    OpenClawConfig {
        meta: new.meta.or(existing.meta),
        wizard: new.wizard.or(existing.wizard),
        auth: new.auth.or(existing.auth),
        models: new.models.or(existing.models),
        agents: new.agents.or(existing.agents),
        messages: new.messages.or(existing.messages),
        commands: new.commands.or(existing.commands),
        gateway: new.gateway.or(existing.gateway),
        skills: new.skills.or(existing.skills),
    }
}

/// The record seeded the first time defaults are saved into a config with
/// no `agents` section yet.
pub fn default_agents_defaults() -> AgentsDefaults {
    AgentsDefaults {
        model: Some(ModelSelection {
            primary: String::new(),
            fast: None,
            balanced: None,
            powerful: None,
        }),
        models: BTreeMap::new(),
        workspace: None,
        max_concurrent: Some(DEFAULT_MAX_CONCURRENT),
        subagents: Some(SubagentsConfig {
            max_concurrent: DEFAULT_SUBAGENT_MAX_CONCURRENT,
        }),
        caching: None,
        timeout: None,
        retry: None,
        compaction: None,
    }
}
