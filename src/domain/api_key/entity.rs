//! API Key entity and lifecycle rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner value that grants access to administrative operations.
///
/// The admin identity is a convention, not a cryptographic property: any key
/// issued with this owner string is an administrator.
pub const ADMIN_OWNER: &str = "admin";

/// Default requests-per-minute quota attached to new keys.
///
/// The quota is carried through the data model and API responses but is not
/// enforced anywhere yet.
pub const DEFAULT_RATE_LIMIT: u32 = 10;

/// API Key record
///
/// The `key` string doubles as the record's identifier and the bearer secret
/// itself; it is generated once at issuance and never changes. Records are
/// never deleted - revocation flips `is_active` and leaves the record in the
/// store as an audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    /// The opaque bearer credential, unique across the store
    key: String,
    /// Principal the key was issued to
    owner: String,
    /// Issuance timestamp, immutable
    created_at: DateTime<Utc>,
    /// Expiration timestamp (None = never expires)
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
    /// False once revoked; never transitions back to true
    is_active: bool,
    /// Requests-per-minute quota (declared, not enforced)
    rate_limit: u32,
}

impl ApiKey {
    /// Create a new active key record for `owner`
    pub fn new(key: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            owner: owner.into(),
            created_at: Utc::now(),
            expires_at: None,
            is_active: true,
            rate_limit: DEFAULT_RATE_LIMIT,
        }
    }

    /// Set expiration
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Set the requests-per-minute quota
    pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    // Getters

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn rate_limit(&self) -> u32 {
        self.rate_limit
    }

    /// Whether this key's owner is the administrative identity
    pub fn is_admin(&self) -> bool {
        self.owner == ADMIN_OWNER
    }

    // Status checks

    /// Check if the key has expired at `now`. A key with no expiration never
    /// expires; otherwise the key is expired from `expires_at` onwards.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }

    /// The authoritative "usable credential" predicate: active and not
    /// expired at `now`. Expiry is computed, never persisted.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.is_active && !self.is_expired(now)
    }

    // Mutators

    /// Revoke the key. Idempotent; there is no way to re-activate.
    pub fn revoke(&mut self) {
        self.is_active = false;
    }
}
