//! Session-scoped user context.
//!
//! DESIGN
//! ======
//! `UserSession` owns the profile and the auth token. Pages never mutate the
//! profile in place; they build a replacement and call `set`, which writes
//! through to the store before returning. The app shell provides one session
//! as `RwSignal<UserSession>` context.
//!
//! Restoration runs after mount (`rehydrate`) so the server render and the
//! first client render agree. Guards wait on `restored` the way they would
//! wait on an auth `loading` flag.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::net::types::UserProfile;
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Store key for the serialized profile.
pub const PROFILE_KEY: &str = "user";
/// Store key for the opaque auth token.
pub const TOKEN_KEY: &str = "auth";

#[derive(Clone)]
pub struct UserSession {
    profile: UserProfile,
    store: Arc<dyn KeyValueStore>,
    /// True once the store has been read.
    pub restored: bool,
}

impl fmt::Debug for UserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSession")
            .field("profile", &self.profile)
            .field("restored", &self.restored)
            .finish_non_exhaustive()
    }
}

impl UserSession {
    /// Empty session that has not read the store yet.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { profile: UserProfile::default(), store, restored: false }
    }

    /// Session populated from whatever the store holds.
    #[must_use]
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let mut session = Self::new(store);
        session.rehydrate();
        session
    }

    /// Replace the in-memory profile with the stored one.
    ///
    /// A missing entry yields the default profile. A malformed entry is logged
    /// and also yields the default profile.
    pub fn rehydrate(&mut self) {
        self.profile = match load_json::<UserProfile>(self.store.as_ref(), PROFILE_KEY) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable stored profile: {e}");
                UserProfile::default()
            }
        };
        self.restored = true;
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Replace the profile wholesale and persist it.
    pub fn set(&mut self, profile: UserProfile) {
        save_json(self.store.as_ref(), PROFILE_KEY, &profile);
        self.profile = profile;
    }

    /// Stored auth token, ignoring empty values.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.load(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&mut self, token: &str) {
        self.store.save(TOKEN_KEY, token);
    }

    /// Forget the user: default profile, no token.
    pub fn clear(&mut self) {
        self.store.remove(PROFILE_KEY);
        self.store.remove(TOKEN_KEY);
        self.profile = UserProfile::default();
    }
}
