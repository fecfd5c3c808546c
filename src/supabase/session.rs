//! Authenticated session state
//!
//! A [`Session`] is an immutable snapshot of one sign-in: the bearer access
//! token plus the user record the auth endpoint returned alongside it. The
//! client keeps its current session in a [`SessionStore`], which swaps
//! whole snapshots under a lock instead of mutating fields in place.
//! Concurrent readers see whichever snapshot was installed last; there is
//! no ordering between a swap and in-flight requests.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::supabase::jwt;
use crate::supabase::types::AuthUser;

/// One authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token attached to requests while this session is active.
    pub access_token: String,
    /// User record from the auth response, when the backend included one.
    pub user: Option<AuthUser>,
}

impl Session {
    /// Create a session snapshot.
    pub fn new(access_token: impl Into<String>, user: Option<AuthUser>) -> Self {
        Self {
            access_token: access_token.into(),
            user,
        }
    }

    /// The authenticated user's id.
    ///
    /// Prefers the id from the auth response's user record and falls back
    /// to the `sub` claim of the access token.
    pub fn user_id(&self) -> Option<Uuid> {
        self.user
            .as_ref()
            .map(|user| user.id)
            .or_else(|| jwt::user_id_from_token(&self.access_token))
    }
}

/// Holder for the client's current session.
///
/// `replace` and `clear` install a new state wholesale; `current` hands out
/// a cheap `Arc` clone of the latest snapshot. Last write wins.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Option<Arc<Session>>>,
}

impl SessionStore {
    /// The currently installed session, if any.
    pub fn current(&self) -> Option<Arc<Session>> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    /// Install a new session, replacing any previous one.
    pub fn replace(&self, session: Session) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(Arc::new(session));
        }
    }

    /// Drop the current session.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}
