// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::{AuthService, PolicyTable, TokenService};
use crate::store::{IdentityStore, SchoolRegistry};

/// Shared application state.
///
/// Everything except the school registry is immutable after startup; the
/// registry is the only thing behind a lock.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub tokens: Arc<TokenService>,
    pub policy: Arc<PolicyTable>,
    pub registry: Arc<RwLock<SchoolRegistry>>,
}

impl AppState {
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        tokens: Arc<TokenService>,
        registry: SchoolRegistry,
    ) -> Self {
        Self {
            auth: AuthService::new(identities, tokens.clone()),
            tokens,
            policy: Arc::new(PolicyTable::new()),
            registry: Arc::new(RwLock::new(registry)),
        }
    }
}
