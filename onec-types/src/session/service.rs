use crate::session::{ExchangeSession, SessionStore};
use actix::prelude::*;
use std::time::Duration;
use time::OffsetDateTime;

pub const PURGE_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Owns the [`SessionStore`]; every access goes through the mailbox, so
/// issuing and checking sessions never race.
pub struct SessionService {
    store: SessionStore,
}

impl SessionService {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }
}

impl Actor for SessionService {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        ctx.run_interval(PURGE_INTERVAL, |act, _| {
            let removed = act.store.purge_expired(OffsetDateTime::now_utc());
            if removed > 0 {
                log::debug!(
                    "[1C Exchange] Purged {removed} expired sessions, {} live",
                    act.store.live_count()
                );
            }
        });
    }
}

#[derive(Message)]
#[rtype(result = "ExchangeSession")]
pub struct Issue;

/// True if any of the presented `(name, value)` cookie pairs is a live session.
#[derive(Message)]
#[rtype(result = "bool")]
pub struct Authenticate(pub Vec<(String, String)>);

impl Handler<Issue> for SessionService {
    type Result = MessageResult<Issue>;

    fn handle(&mut self, _: Issue, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.store.issue(OffsetDateTime::now_utc()))
    }
}

impl Handler<Authenticate> for SessionService {
    type Result = bool;

    fn handle(&mut self, Authenticate(pairs): Authenticate, _: &mut Self::Context) -> bool {
        let now = OffsetDateTime::now_utc();
        pairs
            .iter()
            .any(|(name, value)| self.store.is_valid(name, value, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DEFAULT_SESSION_LABEL;
    use std::collections::HashSet;

    #[actix_rt::test]
    async fn concurrent_issues_never_collide() {
        let addr = SessionService::new(SessionStore::default()).start();
        let sessions = futures::future::join_all((0..200).map(|_| addr.send(Issue)))
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let tokens = sessions
            .iter()
            .map(|s| s.token.clone())
            .collect::<HashSet<_>>();
        assert_eq!(tokens.len(), 200);
    }

    #[actix_rt::test]
    async fn authenticates_any_matching_cookie() {
        let addr = SessionService::new(SessionStore::default()).start();
        let session = addr.send(Issue).await.unwrap();
        let exact = vec![(session.label.clone(), session.token.clone())];
        assert!(addr.send(Authenticate(exact)).await.unwrap());
        let presented = vec![
            ("PHPSESSID".to_string(), "abc".to_string()),
            (DEFAULT_SESSION_LABEL.to_string(), session.token.clone()),
        ];
        assert!(addr.send(Authenticate(presented)).await.unwrap());
        let swapped = vec![(session.token.clone(), session.label.clone())];
        assert!(!addr.send(Authenticate(swapped)).await.unwrap());
        assert!(!addr.send(Authenticate(vec![])).await.unwrap());
    }
}
