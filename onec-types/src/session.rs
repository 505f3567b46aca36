use rand::{distributions, Rng};
use std::collections::HashMap;
use std::time::Duration;
use time::OffsetDateTime;

pub mod service;

pub const DEFAULT_SESSION_LABEL: &str = "medusa_1c_session_id";
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const TOKEN_RANDOM_LEN: usize = 13;

/// Label/token pair handed to the ERP client on `checkauth`. The client
/// sends it back as a `label=token` cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeSession {
    pub token: String,
    pub label: String,
    pub created_at: OffsetDateTime,
}

impl ExchangeSession {
    pub fn is_expired(&self, now: OffsetDateTime, ttl: Duration) -> bool {
        let age = now - self.created_at;
        age.is_positive() && age.unsigned_abs() >= ttl
    }
}

pub struct SessionStore {
    label: String,
    ttl: Duration,
    sessions: HashMap<String, ExchangeSession>,
}

impl SessionStore {
    pub fn new(label: impl Into<String>, ttl: Duration) -> Self {
        Self {
            label: label.into(),
            ttl,
            sessions: HashMap::new(),
        }
    }

    pub fn issue(&mut self, now: OffsetDateTime) -> ExchangeSession {
        let mut token = generate_token(now);
        while self.sessions.contains_key(&token) {
            token = generate_token(now);
        }
        let session = ExchangeSession {
            token: token.clone(),
            label: self.label.clone(),
            created_at: now,
        };
        self.sessions.insert(token, session.clone());
        session
    }

    pub fn is_valid(&self, label: &str, token: &str, now: OffsetDateTime) -> bool {
        self.sessions
            .get(token)
            .is_some_and(|s| s.label == label && !s.is_expired(now, self.ttl))
    }

    /// Returns the number of removed sessions.
    pub fn purge_expired(&mut self, now: OffsetDateTime) -> usize {
        let before = self.sessions.len();
        let ttl = self.ttl;
        self.sessions.retain(|_, s| !s.is_expired(now, ttl));
        before - self.sessions.len()
    }

    pub fn live_count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_LABEL, DEFAULT_SESSION_TTL)
    }
}

fn generate_token(now: OffsetDateTime) -> String {
    let random = rand::thread_rng()
        .sample_iter(distributions::Alphanumeric)
        .take(TOKEN_RANDOM_LEN)
        .map(char::from)
        .collect::<String>();
    format!("sess_{}_{random}", now.unix_timestamp_nanos() / 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn issued_tokens_are_distinct() {
        let mut store = SessionStore::default();
        let now = OffsetDateTime::now_utc();
        let tokens = (0..1000)
            .map(|_| store.issue(now).token)
            .collect::<HashSet<_>>();
        assert_eq!(tokens.len(), 1000);
        assert_eq!(store.live_count(), 1000);
    }

    #[test]
    fn validates_exact_pair_only() {
        let mut store = SessionStore::default();
        let now = OffsetDateTime::now_utc();
        let session = store.issue(now);
        assert_eq!(session.label, DEFAULT_SESSION_LABEL);
        assert!(session.token.starts_with("sess_"));
        assert!(store.is_valid(&session.label, &session.token, now));
        assert!(!store.is_valid(&session.token, &session.label, now));
        assert!(!store.is_valid("other_label", &session.token, now));
        assert!(!store.is_valid(&session.label, "sess_0_unknown", now));
    }

    #[test]
    fn expired_sessions_are_invalid_and_purged() {
        let ttl = Duration::from_secs(60);
        let mut store = SessionStore::new("label", ttl);
        let issued_at = OffsetDateTime::now_utc();
        let old = store.issue(issued_at);
        let later = issued_at + time::Duration::seconds(61);
        let fresh = store.issue(later);

        assert!(store.is_valid("label", &old.token, issued_at + time::Duration::seconds(59)));
        assert!(!store.is_valid("label", &old.token, later));
        assert!(store.is_valid("label", &fresh.token, later));

        assert_eq!(store.purge_expired(later), 1);
        assert_eq!(store.live_count(), 1);
        assert!(store.is_valid("label", &fresh.token, later));
    }
}
