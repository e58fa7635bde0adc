// Clawdesk Engine — Cached gateway reads
// One read-through cache per logical resource, with an explicit
// dependency table instead of ad hoc invalidation keys: writing a
// resource invalidates its own cached view and every view derived from
// it. Providers feed the model-selection lists inside the agents panel,
// so a provider write also drops the agents-defaults view.

use crate::atoms::error::ConfigResult;
use crate::atoms::types::{AgentsDefaults, Provider};
use crate::engine::gateway::ConfigGateway;
use log::debug;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The logical resources the editor reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Providers,
    AgentsDefaults,
}

/// Which cached views a write to each resource invalidates.
const DEPENDENTS: &[(Resource, &[Resource])] = &[
    (Resource::Providers, &[Resource::Providers, Resource::AgentsDefaults]),
    (Resource::AgentsDefaults, &[Resource::AgentsDefaults]),
];

fn dependents_of(resource: Resource) -> &'static [Resource] {
    DEPENDENTS
        .iter()
        .find(|(r, _)| *r == resource)
        .map(|(_, deps)| *deps)
        .unwrap_or(&[])
}

/// Read-through cache over a [`ConfigGateway`].
///
/// Reads hit the backend once and serve clones until a write invalidates
/// them. Writes go straight through, then drop the dependent views so
/// the next read refetches. Single local editor — no cross-process
/// coherence is attempted.
pub struct ConfigCache {
    gateway: Arc<dyn ConfigGateway>,
    providers: Mutex<Option<BTreeMap<String, Provider>>>,
    agents_defaults: Mutex<Option<Option<AgentsDefaults>>>,
}

impl ConfigCache {
    pub fn new(gateway: Arc<dyn ConfigGateway>) -> Self {
        ConfigCache {
            gateway,
            providers: Mutex::new(None),
            agents_defaults: Mutex::new(None),
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub async fn providers(&self) -> ConfigResult<BTreeMap<String, Provider>> {
        if let Some(cached) = self.providers.lock().clone() {
            return Ok(cached);
        }
        let fresh = self.gateway.get_providers().await?;
        *self.providers.lock() = Some(fresh.clone());
        Ok(fresh)
    }

    pub async fn agents_defaults(&self) -> ConfigResult<Option<AgentsDefaults>> {
        if let Some(cached) = self.agents_defaults.lock().clone() {
            return Ok(cached);
        }
        let fresh = self.gateway.get_agents_defaults().await?;
        *self.agents_defaults.lock() = Some(fresh.clone());
        Ok(fresh)
    }

    // ── Writes ────────────────────────────────────────────────────────────

    pub async fn add_provider(&self, id: String, provider: Provider) -> ConfigResult<()> {
        self.gateway.add_provider(id, provider).await?;
        self.invalidate(Resource::Providers);
        Ok(())
    }

    pub async fn update_provider(&self, id: String, provider: Provider) -> ConfigResult<()> {
        self.gateway.update_provider(id, provider).await?;
        self.invalidate(Resource::Providers);
        Ok(())
    }

    pub async fn delete_provider(&self, id: String) -> ConfigResult<()> {
        self.gateway.delete_provider(id).await?;
        self.invalidate(Resource::Providers);
        Ok(())
    }

    pub async fn save_agents_defaults(&self, defaults: AgentsDefaults) -> ConfigResult<()> {
        self.gateway.save_agents_defaults(defaults).await?;
        self.invalidate(Resource::AgentsDefaults);
        Ok(())
    }

    /// Drop the cached views of `resource` and everything derived from it.
    pub fn invalidate(&self, resource: Resource) {
        for dep in dependents_of(resource) {
            debug!("[cache] Invalidating {:?}", dep);
            match dep {
                Resource::Providers => *self.providers.lock() = None,
                Resource::AgentsDefaults => *self.agents_defaults.lock() = None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::error::ConfigError;
    use crate::atoms::types::{ModelCost, ModelInfo, OpenClawConfig};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory gateway that counts provider reads so tests can observe
    /// cache hits and invalidation-driven refetches.
    #[derive(Default)]
    struct CountingGateway {
        providers: Mutex<BTreeMap<String, Provider>>,
        defaults: Mutex<Option<AgentsDefaults>>,
        provider_reads: AtomicUsize,
        defaults_reads: AtomicUsize,
    }

    #[async_trait]
    impl ConfigGateway for CountingGateway {
        async fn get_config(&self) -> ConfigResult<OpenClawConfig> {
            Ok(OpenClawConfig::default())
        }
        async fn save_config(&self, _config: OpenClawConfig) -> ConfigResult<()> {
            Ok(())
        }
        async fn get_config_path(&self) -> ConfigResult<String> {
            Ok("memory".into())
        }
        async fn config_exists(&self) -> ConfigResult<bool> {
            Ok(true)
        }
        async fn backup_config(&self) -> ConfigResult<String> {
            Ok("memory.bak".into())
        }
        async fn restore_config(&self, _backup_path: String) -> ConfigResult<()> {
            Ok(())
        }
        async fn get_providers(&self) -> ConfigResult<BTreeMap<String, Provider>> {
            self.provider_reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.providers.lock().clone())
        }
        async fn add_provider(&self, id: String, provider: Provider) -> ConfigResult<()> {
            let mut map = self.providers.lock();
            if map.contains_key(&id) {
                return Err(ConfigError::ProviderExists(id));
            }
            map.insert(id, provider);
            Ok(())
        }
        async fn update_provider(&self, id: String, provider: Provider) -> ConfigResult<()> {
            let mut map = self.providers.lock();
            if !map.contains_key(&id) {
                return Err(ConfigError::ProviderNotFound(id));
            }
            map.insert(id, provider);
            Ok(())
        }
        async fn delete_provider(&self, id: String) -> ConfigResult<()> {
            if self.providers.lock().remove(&id).is_none() {
                return Err(ConfigError::ProviderNotFound(id));
            }
            Ok(())
        }
        async fn get_agents_defaults(&self) -> ConfigResult<Option<AgentsDefaults>> {
            self.defaults_reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.defaults.lock().clone())
        }
        async fn save_agents_defaults(&self, defaults: AgentsDefaults) -> ConfigResult<()> {
            *self.defaults.lock() = Some(defaults);
            Ok(())
        }
    }

    fn make_provider() -> Provider {
        Provider {
            base_url: "https://x".into(),
            api_key: "sk-1".into(),
            api: "openai-chat".into(),
            models: vec![ModelInfo {
                id: "m".into(),
                name: "M".into(),
                reasoning: false,
                input: vec!["text".into()],
                cost: ModelCost::unpriced(),
                context_window: 1000,
                max_tokens: 100,
                tier: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_repeated_reads_hit_cache() {
        let gateway = Arc::new(CountingGateway::default());
        let cache = ConfigCache::new(gateway.clone());

        cache.providers().await.unwrap();
        cache.providers().await.unwrap();
        cache.providers().await.unwrap();
        assert_eq!(gateway.provider_reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_provider_write_invalidates_both_views() {
        let gateway = Arc::new(CountingGateway::default());
        let cache = ConfigCache::new(gateway.clone());

        cache.providers().await.unwrap();
        cache.agents_defaults().await.unwrap();

        cache.add_provider("p1".into(), make_provider()).await.unwrap();

        // Both views refetch: the agents panel lists models derived from
        // the provider map.
        let providers = cache.providers().await.unwrap();
        assert!(providers.contains_key("p1"));
        cache.agents_defaults().await.unwrap();
        assert_eq!(gateway.provider_reads.load(Ordering::SeqCst), 2);
        assert_eq!(gateway.defaults_reads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_defaults_write_leaves_provider_view() {
        let gateway = Arc::new(CountingGateway::default());
        let cache = ConfigCache::new(gateway.clone());

        cache.providers().await.unwrap();
        cache.agents_defaults().await.unwrap();

        cache.save_agents_defaults(AgentsDefaults::default()).await.unwrap();

        cache.providers().await.unwrap();
        cache.agents_defaults().await.unwrap();
        assert_eq!(gateway.provider_reads.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.defaults_reads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_cache_and_propagates() {
        let gateway = Arc::new(CountingGateway::default());
        let cache = ConfigCache::new(gateway.clone());

        cache.providers().await.unwrap();
        let err = cache.update_provider("ghost".into(), make_provider()).await;
        assert!(matches!(err, Err(ConfigError::ProviderNotFound(_))));

        // The view was not invalidated by the failed write.
        cache.providers().await.unwrap();
        assert_eq!(gateway.provider_reads.load(Ordering::SeqCst), 1);
    }
}
