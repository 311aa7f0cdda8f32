//! Credential validation outcome

use chrono::{DateTime, Utc};

use super::entity::ApiKey;

/// Outcome of validating a presented credential.
///
/// The deny reasons are ordered: presence is checked before existence,
/// existence before the active flag, and the active flag before expiry. A key
/// that is both revoked and expired therefore reports `Revoked`.
#[derive(Debug, Clone)]
pub enum Validation {
    /// No credential was presented at all
    Missing,
    /// The presented string does not match any stored key
    NotFound,
    /// Matched a record that has been revoked
    Revoked,
    /// Matched a record whose expiration has passed
    Expired,
    /// Matched an active, unexpired record
    Valid(ApiKey),
}

impl Validation {
    /// Classify a store lookup result at `now`.
    ///
    /// The presence check happens before the lookup, so `record` being `None`
    /// means the credential was presented but is unknown.
    pub fn of_record(record: Option<ApiKey>, now: DateTime<Utc>) -> Self {
        match record {
            None => Self::NotFound,
            Some(record) if !record.is_active() => Self::Revoked,
            Some(record) if record.is_expired(now) => Self::Expired,
            Some(record) => Self::Valid(record),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_unknown_key_is_not_found() {
        let outcome = Validation::of_record(None, Utc::now());
        assert!(matches!(outcome, Validation::NotFound));
    }

    #[test]
    fn test_active_unexpired_key_is_valid() {
        let record = ApiKey::new("kg_test_abc", "alice");
        let outcome = Validation::of_record(Some(record), Utc::now());

        assert!(outcome.is_valid());
        match outcome {
            Validation::Valid(record) => assert_eq!(record.owner(), "alice"),
            other => panic!("expected Valid, got {:?}", other),
        }
    }

    #[test]
    fn test_revoked_key_is_revoked() {
        let mut record = ApiKey::new("kg_test_abc", "alice");
        record.revoke();

        let outcome = Validation::of_record(Some(record), Utc::now());
        assert!(matches!(outcome, Validation::Revoked));
    }

    #[test]
    fn test_expired_key_is_expired() {
        let record = ApiKey::new("kg_test_abc", "alice")
            .with_expires_at(Utc::now() - Duration::hours(1));

        let outcome = Validation::of_record(Some(record), Utc::now());
        assert!(matches!(outcome, Validation::Expired));
    }

    #[test]
    fn test_revoked_wins_over_expired() {
        let mut record = ApiKey::new("kg_test_abc", "alice")
            .with_expires_at(Utc::now() - Duration::hours(1));
        record.revoke();

        let outcome = Validation::of_record(Some(record), Utc::now());
        assert!(matches!(outcome, Validation::Revoked));
    }
}
