// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! Identity store for login lookups.
//!
//! Identities are seeded once at startup and only read afterwards. The store
//! sits behind the [`IdentityStore`] trait so credential verification can
//! treat "backend unreachable" as its own failure mode instead of folding it
//! into "no such user".

use std::collections::HashMap;

use crate::auth::Role;

/// A login identity.
///
/// `secret_hash` is an Argon2id PHC string; the plaintext secret is never
/// stored anywhere.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
    pub secret_hash: String,
    pub role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("identity store unavailable: {0}")]
    Unavailable(String),
}

/// Lookup of identities by username.
///
/// Lookups are byte-exact on the username; collation is whatever the backing
/// store does, which for the in-memory map is exact `String` equality.
pub trait IdentityStore: Send + Sync {
    /// Fetch an identity by username. `Ok(None)` means no such user, which
    /// is a normal outcome; `Err` means the store itself failed.
    fn find_by_username(&self, username: &str) -> Result<Option<Identity>, StoreError>;
}

/// Map-backed identity store.
#[derive(Default)]
pub struct InMemoryIdentities {
    users: HashMap<String, Identity>,
}

impl InMemoryIdentities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an identity, replacing any previous one with the same username.
    /// Called only during startup seeding.
    pub fn insert(&mut self, identity: Identity) {
        self.users.insert(identity.username.clone(), identity);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl IdentityStore for InMemoryIdentities {
    fn find_by_username(&self, username: &str) -> Result<Option<Identity>, StoreError> {
        Ok(self.users.get(username).cloned())
    }
}
