//! Per-session expense list storage.
//!
//! Each logged-in browser session owns one [ExpenseListState]. The state lives
//! only in memory and is dropped when the user logs out or when the session
//! expires along with its auth cookie.

use std::{
    collections::HashMap,
    fmt::Display,
    sync::{Arc, Mutex},
};

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::{Error, auth::DEFAULT_COOKIE_DURATION, expense::ExpenseListState};

/// A random identifier for a browser session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID from 128 random bits.
    pub fn random() -> Self {
        Self(format!("{:032x}", rand::random::<u128>()))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
struct SessionEntry {
    list: ExpenseListState,
    expires_at: Option<OffsetDateTime>,
}

impl SessionEntry {
    fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Push the expiry out to `now` plus the auth cookie's sliding duration,
    /// matching the extension the auth guard gives the cookie.
    fn touch(&mut self, now: OffsetDateTime) {
        let extended = now.saturating_add(DEFAULT_COOKIE_DURATION);

        self.expires_at = Some(self.expires_at.map_or(extended, |current| current.max(extended)));
    }
}

type Sessions = HashMap<SessionId, SessionEntry>;

/// Holds the expense list state for every active session.
///
/// A session expires at the same time as its auth cookie, and expired sessions
/// are removed whenever a session is started or accessed.
///
/// Cloning the store is cheap and every clone refers to the same sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<Sessions>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session with an empty expense list that expires after `duration`.
    ///
    /// `duration` should match the lifetime of the auth cookie issued for the session.
    ///
    /// # Errors
    ///
    /// Returns [Error::SessionLockError] if the lock is poisoned.
    pub fn start(&self, duration: Duration) -> Result<SessionId, Error> {
        self.start_at(OffsetDateTime::now_utc(), duration)
    }

    fn start_at(&self, now: OffsetDateTime, duration: Duration) -> Result<SessionId, Error> {
        let session_id = SessionId::random();
        let mut sessions = self.lock()?;
        prune_expired(&mut sessions, now);
        sessions.insert(
            session_id.clone(),
            SessionEntry {
                list: ExpenseListState::new(),
                expires_at: Some(now.saturating_add(duration)),
            },
        );
        tracing::debug!("Started a new session, {} active", sessions.len());

        Ok(session_id)
    }

    /// Discard the state for `session_id`. Unknown IDs are ignored.
    ///
    /// # Errors
    ///
    /// Returns [Error::SessionLockError] if the lock is poisoned.
    pub fn end(&self, session_id: &SessionId) -> Result<(), Error> {
        self.lock()?.remove(session_id);

        Ok(())
    }

    /// Run `f` against the state for `session_id`.
    ///
    /// An empty state is created if the session is unknown or has expired,
    /// e.g. after the server restarts while the auth cookie is still valid.
    /// Each access extends the session the same way the auth cookie is extended.
    ///
    /// The lock is held while `f` runs, so `f` must not block.
    ///
    /// # Errors
    ///
    /// Returns [Error::SessionLockError] if the lock is poisoned.
    pub fn with_session<T>(
        &self,
        session_id: &SessionId,
        f: impl FnOnce(&mut ExpenseListState) -> T,
    ) -> Result<T, Error> {
        self.with_session_at(session_id, OffsetDateTime::now_utc(), f)
    }

    fn with_session_at<T>(
        &self,
        session_id: &SessionId,
        now: OffsetDateTime,
        f: impl FnOnce(&mut ExpenseListState) -> T,
    ) -> Result<T, Error> {
        let mut sessions = self.lock()?;
        prune_expired(&mut sessions, now);
        let entry = sessions.entry(session_id.clone()).or_default();
        entry.touch(now);

        Ok(f(&mut entry.list))
    }

    #[cfg(test)]
    pub fn len(&self) -> Result<usize, Error> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Sessions>, Error> {
        self.sessions.lock().map_err(|error| {
            tracing::error!("could not acquire session lock: {error}");
            Error::SessionLockError
        })
    }
}

fn prune_expired(sessions: &mut Sessions, now: OffsetDateTime) {
    let before = sessions.len();
    sessions.retain(|_, entry| !entry.is_expired(now));

    let removed = before - sessions.len();
    if removed > 0 {
        tracing::debug!("Removed {removed} expired sessions");
    }
}
