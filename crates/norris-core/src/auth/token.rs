//! Bearer tokens for the programmatic API.

use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};

/// Length of a minted token value, in characters.
const TOKEN_LEN: usize = 48;

/// A bearer token granting API access on behalf of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiToken {
    /// The opaque token value presented by API callers
    pub token: String,
    /// Id of the user this token acts for
    pub user_id: String,
    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,
    /// Expiry timestamp; `None` means the token does not expire
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ApiToken {
    /// Issues a new token for a user, valid for `ttl` (or forever if `None`).
    pub fn issue(user_id: impl Into<String>, ttl: Option<Duration>) -> Self {
        let issued_at = Utc::now();
        Self {
            token: mint_token_value(&mut rand::thread_rng()),
            user_id: user_id.into(),
            issued_at,
            expires_at: ttl.map(|ttl| issued_at + ttl),
        }
    }

    /// Whether the token has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Mints a random alphanumeric token value.
pub fn mint_token_value(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// An abstract repository for managing issued API tokens.
#[async_trait::async_trait]
pub trait TokenRepository: Send + Sync {
    /// Finds a token by its opaque value.
    async fn find_by_value(&self, token: &str) -> Result<Option<ApiToken>>;

    /// Persists a newly issued token.
    async fn save(&self, token: &ApiToken) -> Result<()>;

    /// Revokes a token. Revoking a missing token is not an error.
    async fn delete(&self, token: &str) -> Result<()>;
}
