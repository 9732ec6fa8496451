//! Authentication use case.
//!
//! Registration with field-level validation, session login/logout, and bearer
//! token issuance/verification for API callers. Core fact operations never
//! ask "who is logged in" themselves; boundaries call into this use case
//! first and pass the resolved identity along.

use chrono::{Duration, Utc};
use norris_core::auth::{ApiToken, TokenRepository, hash_password, verify_password};
use norris_core::error::{NorrisError, Result};
use norris_core::session::{Session, SessionRepository};
use norris_core::user::{RegistrationDraft, User, UserRepository};
use std::sync::Arc;

/// Use case for user accounts, session identity, and API tokens.
pub struct AuthUseCase {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    tokens: Arc<dyn TokenRepository>,
    /// Lifetime of newly issued API tokens; `None` disables expiry.
    token_ttl: Option<Duration>,
}

impl AuthUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        tokens: Arc<dyn TokenRepository>,
        token_ttl: Option<Duration>,
    ) -> Self {
        Self {
            users,
            sessions,
            tokens,
            token_ttl,
        }
    }

    /// Registers a new user account.
    ///
    /// # Errors
    ///
    /// `NorrisError::Validation` with field-level messages for a malformed
    /// username, a short or mismatched password, or a taken username. The
    /// user table is unchanged on failure.
    pub async fn register(&self, draft: RegistrationDraft) -> Result<User> {
        let username = draft.validate()?;
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(NorrisError::invalid_field(
                "username",
                "a user with that username already exists",
            ));
        }
        let user = User::new(username, hash_password(&draft.password)?);
        self.users.create(&user).await?;
        Ok(user)
    }

    /// Authenticates credentials and marks the session as logged in.
    ///
    /// An expired or unknown session id yields a fresh session under the same
    /// id, so login always succeeds against valid credentials.
    pub async fn login(&self, session_id: &str, username: &str, password: &str) -> Result<User> {
        let user = self.authenticate(username, password).await?;
        let mut session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .unwrap_or_else(|| Session::with_id(session_id));
        session.login(user.id.clone());
        self.sessions.save(&session).await?;
        tracing::info!("User {} logged in", user.username);
        Ok(user)
    }

    /// Clears the session's logged-in user. Logging out of an unknown session
    /// is a no-op; the seen list of an existing session survives.
    pub async fn logout(&self, session_id: &str) -> Result<()> {
        if let Some(mut session) = self.sessions.find_by_id(session_id).await? {
            session.logout();
            self.sessions.save(&session).await?;
        }
        Ok(())
    }

    /// Resolves the session's logged-in user, if any.
    pub async fn current_user(&self, session_id: &str) -> Result<Option<User>> {
        let Some(session) = self.sessions.find_by_id(session_id).await? else {
            return Ok(None);
        };
        let Some(user_id) = session.user_id else {
            return Ok(None);
        };
        self.users.find_by_id(&user_id).await
    }

    /// Authenticates credentials and mints a bearer token for API use.
    pub async fn issue_token(&self, username: &str, password: &str) -> Result<ApiToken> {
        let user = self.authenticate(username, password).await?;
        let token = ApiToken::issue(user.id, self.token_ttl);
        self.tokens.save(&token).await?;
        tracing::info!("Issued API token for {}", user.username);
        Ok(token)
    }

    /// Resolves a bearer token to its active user.
    ///
    /// # Errors
    ///
    /// `NorrisError::AuthenticationRequired` for an unknown, expired, or
    /// orphaned token. Expired tokens are revoked on sight.
    pub async fn verify_token(&self, token_value: &str) -> Result<User> {
        let Some(token) = self.tokens.find_by_value(token_value).await? else {
            return Err(NorrisError::AuthenticationRequired);
        };
        if token.is_expired(Utc::now()) {
            self.tokens.delete(&token.token).await?;
            return Err(NorrisError::AuthenticationRequired);
        }
        match self.users.find_by_id(&token.user_id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(NorrisError::AuthenticationRequired),
        }
    }

    /// Revokes a bearer token.
    pub async fn revoke_token(&self, token_value: &str) -> Result<()> {
        self.tokens.delete(token_value).await
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(NorrisError::InvalidCredentials);
        };
        if !user.is_active || !verify_password(password, &user.password_hash)? {
            return Err(NorrisError::InvalidCredentials);
        }
        Ok(user)
    }
}
