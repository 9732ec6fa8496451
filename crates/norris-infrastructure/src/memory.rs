//! In-memory session, user, and token repositories.
//!
//! Companions to [`crate::MemoryFactRepository`] for the non-persistent
//! deployment mode and for tests that should not touch the filesystem.

use async_trait::async_trait;
use norris_core::auth::{ApiToken, TokenRepository};
use norris_core::error::{NorrisError, Result};
use norris_core::session::{Session, SessionRepository};
use norris_core::user::{User, UserRepository};
use std::collections::HashMap;
use std::sync::RwLock;

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

/// Session repository holding all records in process memory.
#[derive(Default)]
pub struct MemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        Ok(read(&self.sessions).get(session_id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        write(&self.sessions).insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        write(&self.sessions).remove(session_id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        Ok(read(&self.sessions).values().cloned().collect())
    }
}

/// User repository holding all records in process memory.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(read(&self.users)
            .iter()
            .find(|user| user.id == user_id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(read(&self.users)
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<()> {
        let mut users = write(&self.users);
        if users.iter().any(|u| u.username == user.username) {
            return Err(NorrisError::invalid_field(
                "username",
                "a user with that username already exists",
            ));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        Ok(read(&self.users).clone())
    }
}

/// Token repository holding all records in process memory.
#[derive(Default)]
pub struct MemoryTokenRepository {
    tokens: RwLock<HashMap<String, ApiToken>>,
}

impl MemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for MemoryTokenRepository {
    async fn find_by_value(&self, token: &str) -> Result<Option<ApiToken>> {
        Ok(read(&self.tokens).get(token).cloned())
    }

    async fn save(&self, token: &ApiToken) -> Result<()> {
        write(&self.tokens).insert(token.token.clone(), token.clone());
        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<()> {
        write(&self.tokens).remove(token);
        Ok(())
    }
}
