//! Application context: wires configuration, repositories, and use cases.

use anyhow::{Context, Result};
use chrono::Duration;
use norris_application::{ApiUseCase, AuthUseCase, FactUseCase, RandomFactUseCase};
use norris_core::config::{RootConfig, StorageBackend};
use norris_core::fact::FactRepository;
use norris_core::session::SessionRepository;
use norris_infrastructure::{
    ConfigService, MemoryFactRepository, NorrisPaths, TomlFactRepository, TomlSessionRepository,
    TomlTokenRepository, TomlUserRepository,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Fully wired application services for one CLI invocation.
///
/// The fact store is backend-selectable (in-memory seeded list or TOML
/// files); sessions, users, and tokens are always file-backed so identity
/// and seen-fact state survive across invocations either way.
pub struct AppContext {
    pub base_dir: PathBuf,
    pub facts: Arc<FactUseCase>,
    pub random: RandomFactUseCase,
    pub auth: Arc<AuthUseCase>,
    pub api: ApiUseCase,
}

impl AppContext {
    /// Builds the context from the default configuration location.
    pub async fn build() -> Result<Self> {
        Self::build_with(ConfigService::new()).await
    }

    /// Builds the context from an explicit configuration service. Used in
    /// tests.
    pub async fn build_with(config_service: ConfigService) -> Result<Self> {
        let config = config_service.get_config();
        let base_dir = match &config.storage.data_dir {
            Some(dir) => dir.clone(),
            None => NorrisPaths::config_dir().context("cannot resolve data directory")?,
        };
        Self::build_at(config, base_dir).await
    }

    /// Builds the context against an explicit data directory.
    pub async fn build_at(config: RootConfig, base_dir: PathBuf) -> Result<Self> {
        let fact_repository: Arc<dyn FactRepository> = match config.storage.backend {
            StorageBackend::Memory => {
                Arc::new(MemoryFactRepository::with_seed(&config.seed_facts))
            }
            StorageBackend::File => {
                let repo = TomlFactRepository::new(base_dir.join("facts")).await?;
                repo.seed_if_empty(&config.seed_facts).await?;
                Arc::new(repo)
            }
        };

        let sessions: Arc<dyn SessionRepository> =
            Arc::new(TomlSessionRepository::new(base_dir.join("sessions")).await?);
        let users = Arc::new(TomlUserRepository::new(base_dir.join("users")).await?);
        let tokens = Arc::new(TomlTokenRepository::new(base_dir.join("tokens")).await?);

        let token_ttl = config.auth.token_ttl_minutes.map(Duration::minutes);
        let facts = Arc::new(FactUseCase::new(fact_repository.clone()));
        let auth = Arc::new(AuthUseCase::new(users, sessions.clone(), tokens, token_ttl));

        Ok(Self {
            base_dir,
            random: RandomFactUseCase::new(fact_repository, sessions),
            api: ApiUseCase::new(auth.clone(), facts.clone()),
            facts,
            auth,
        })
    }

    /// Path of the file recording this installation's active session id.
    pub fn active_session_file(&self) -> PathBuf {
        self.base_dir.join("active_session")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_backend_seeds_on_first_build() {
        let dir = TempDir::new().unwrap();
        let context = AppContext::build_at(RootConfig::default(), dir.path().to_path_buf())
            .await
            .unwrap();
        assert_eq!(context.facts.list().await.unwrap().len(), 6);

        // Rebuilding must not re-seed.
        let context = AppContext::build_at(RootConfig::default(), dir.path().to_path_buf())
            .await
            .unwrap();
        assert_eq!(context.facts.list().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_memory_backend_serves_seed_facts() {
        let dir = TempDir::new().unwrap();
        let mut config = RootConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config.seed_facts = vec!["only one".to_string()];

        let context = AppContext::build_at(config, dir.path().to_path_buf())
            .await
            .unwrap();
        let (fact, _) = context.random.next_fact(None).await.unwrap();
        assert_eq!(fact.text, "only one");
    }
}
