// Clawdesk Engine — Persistence gateway contract
// The async boundary the presentation layer talks to. The core never
// catches gateway errors — they propagate unchanged so the UI owns all
// user-visible messaging and retry affordances.

use crate::atoms::error::ConfigResult;
use crate::atoms::types::{AgentsDefaults, OpenClawConfig, Provider};
use crate::engine::store::FileConfigStore;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Everything the editor needs from a configuration backend.
///
/// Each call is one atomic request-response with no partial results.
/// Implementations do not serialize concurrent writers — the caller must
/// (the editor is single-user, last write wins).
#[async_trait]
pub trait ConfigGateway: Send + Sync {
    // ── Whole document ────────────────────────────────────────────────────
    async fn get_config(&self) -> ConfigResult<OpenClawConfig>;
    async fn save_config(&self, config: OpenClawConfig) -> ConfigResult<()>;
    async fn get_config_path(&self) -> ConfigResult<String>;
    async fn config_exists(&self) -> ConfigResult<bool>;

    /// Returns the path of the created backup file.
    async fn backup_config(&self) -> ConfigResult<String>;
    async fn restore_config(&self, backup_path: String) -> ConfigResult<()>;

    // ── Providers ─────────────────────────────────────────────────────────
    async fn get_providers(&self) -> ConfigResult<BTreeMap<String, Provider>>;
    /// Fails with `ProviderExists` when the id is taken.
    async fn add_provider(&self, id: String, provider: Provider) -> ConfigResult<()>;
    /// Fails with `ProviderNotFound` when the id is absent.
    async fn update_provider(&self, id: String, provider: Provider) -> ConfigResult<()>;
    /// Fails with `ProviderNotFound` when the id is absent.
    async fn delete_provider(&self, id: String) -> ConfigResult<()>;

    // ── Agents defaults ───────────────────────────────────────────────────
    async fn get_agents_defaults(&self) -> ConfigResult<Option<AgentsDefaults>>;
    async fn save_agents_defaults(&self, defaults: AgentsDefaults) -> ConfigResult<()>;
}

// The file store is the production gateway. Its I/O is plain blocking
// std::fs on a file of a few kilobytes; wrapping each call in
// spawn_blocking would cost more than the read itself.
#[async_trait]
impl ConfigGateway for FileConfigStore {
    async fn get_config(&self) -> ConfigResult<OpenClawConfig> {
        self.read()
    }

    async fn save_config(&self, config: OpenClawConfig) -> ConfigResult<()> {
        self.write(&config)
    }

    async fn get_config_path(&self) -> ConfigResult<String> {
        Ok(self.config_path().to_string_lossy().into_owned())
    }

    async fn config_exists(&self) -> ConfigResult<bool> {
        Ok(self.exists())
    }

    async fn backup_config(&self) -> ConfigResult<String> {
        Ok(self.backup()?.to_string_lossy().into_owned())
    }

    async fn restore_config(&self, backup_path: String) -> ConfigResult<()> {
        self.restore(std::path::Path::new(&backup_path))
    }

    async fn get_providers(&self) -> ConfigResult<BTreeMap<String, Provider>> {
        self.providers()
    }

    async fn add_provider(&self, id: String, provider: Provider) -> ConfigResult<()> {
        FileConfigStore::add_provider(self, &id, provider)
    }

    async fn update_provider(&self, id: String, provider: Provider) -> ConfigResult<()> {
        FileConfigStore::update_provider(self, &id, provider)
    }

    async fn delete_provider(&self, id: String) -> ConfigResult<()> {
        FileConfigStore::delete_provider(self, &id)
    }

    async fn get_agents_defaults(&self) -> ConfigResult<Option<AgentsDefaults>> {
        self.agents_defaults()
    }

    async fn save_agents_defaults(&self, defaults: AgentsDefaults) -> ConfigResult<()> {
        FileConfigStore::save_agents_defaults(self, defaults)
    }
}
