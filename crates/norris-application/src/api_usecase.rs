//! Token-gated API facade.
//!
//! The programmatic counterpart of the interactive flows: every operation
//! verifies a bearer token first, then delegates to the fact use case. Typed
//! errors stand in for the wire status codes a transport would emit:
//! Validation maps to 400, AuthenticationRequired to 401, NotFound to 404.

use norris_core::error::{NorrisError, Result};
use norris_core::fact::{Fact, FactDraft};
use std::sync::Arc;

use crate::auth_usecase::AuthUseCase;
use crate::fact_usecase::FactUseCase;

/// Use case exposing fact CRUD behind bearer-token authentication.
pub struct ApiUseCase {
    auth: Arc<AuthUseCase>,
    facts: Arc<FactUseCase>,
}

impl ApiUseCase {
    pub fn new(auth: Arc<AuthUseCase>, facts: Arc<FactUseCase>) -> Self {
        Self { auth, facts }
    }

    /// Lists all facts.
    pub async fn list_facts(&self, token: &str) -> Result<Vec<Fact>> {
        self.auth.verify_token(token).await?;
        self.facts.list().await
    }

    /// Retrieves one fact by id.
    pub async fn get_fact(&self, token: &str, id: u64) -> Result<Fact> {
        self.auth.verify_token(token).await?;
        self.facts.get(id).await
    }

    /// Creates a fact owned by the token's user.
    pub async fn create_fact(&self, token: &str, draft: FactDraft) -> Result<Fact> {
        let user = self.auth.verify_token(token).await?;
        self.facts.create(draft, Some(user.id)).await
    }

    /// Replaces a fact's text.
    pub async fn update_fact(&self, token: &str, id: u64, draft: FactDraft) -> Result<Fact> {
        self.auth.verify_token(token).await?;
        self.facts.update(id, draft).await
    }

    /// Deletes a fact.
    pub async fn delete_fact(&self, token: &str, id: u64) -> Result<()> {
        self.auth.verify_token(token).await?;
        self.facts.delete(id).await
    }
}

/// Maps an error to the HTTP-style status code a transport would emit.
pub fn status_code_for(err: &NorrisError) -> u16 {
    match err {
        NorrisError::Validation { .. } => 400,
        NorrisError::AuthenticationRequired | NorrisError::InvalidCredentials => 401,
        NorrisError::NotFound { .. } | NorrisError::Exhausted => 404,
        _ => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use norris_core::user::RegistrationDraft;
    use norris_infrastructure::{
        MemoryFactRepository, MemorySessionRepository, MemoryTokenRepository, MemoryUserRepository,
    };

    async fn api_with_token() -> (ApiUseCase, String) {
        let auth = Arc::new(AuthUseCase::new(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemorySessionRepository::new()),
            Arc::new(MemoryTokenRepository::new()),
            Some(Duration::hours(1)),
        ));
        let facts = Arc::new(FactUseCase::new(Arc::new(MemoryFactRepository::new())));
        auth.register(RegistrationDraft::new("chuck", "roundhouse1", "roundhouse1"))
            .await
            .unwrap();
        let token = auth.issue_token("chuck", "roundhouse1").await.unwrap();
        (ApiUseCase::new(auth, facts), token.token)
    }

    #[tokio::test]
    async fn test_all_operations_require_a_token() {
        let (api, _token) = api_with_token().await;
        assert!(api.list_facts("bogus").await.unwrap_err().is_auth_failure());
        assert!(api.get_fact("bogus", 1).await.unwrap_err().is_auth_failure());
        assert!(
            api.create_fact("bogus", FactDraft::new("fact"))
                .await
                .unwrap_err()
                .is_auth_failure()
        );
        assert!(
            api.update_fact("bogus", 1, FactDraft::new("fact"))
                .await
                .unwrap_err()
                .is_auth_failure()
        );
        assert!(api.delete_fact("bogus", 1).await.unwrap_err().is_auth_failure());
    }

    #[tokio::test]
    async fn test_crud_roundtrip_with_ownership() {
        let (api, token) = api_with_token().await;

        let created = api
            .create_fact(&token, FactDraft::new("via api"))
            .await
            .unwrap();
        assert!(created.user_id.is_some());

        let fetched = api.get_fact(&token, created.id).await.unwrap();
        assert_eq!(fetched.text, "via api");

        let updated = api
            .update_fact(&token, created.id, FactDraft::new("edited"))
            .await
            .unwrap();
        assert_eq!(updated.text, "edited");

        api.delete_fact(&token, created.id).await.unwrap();
        assert!(api.list_facts(&token).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_code_mapping() {
        let (api, token) = api_with_token().await;

        let err = api.get_fact(&token, 42).await.unwrap_err();
        assert_eq!(status_code_for(&err), 404);

        let err = api
            .create_fact(&token, FactDraft::new(""))
            .await
            .unwrap_err();
        assert_eq!(status_code_for(&err), 400);

        let err = api.list_facts("bogus").await.unwrap_err();
        assert_eq!(status_code_for(&err), 401);
    }
}
