// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! Credential verification and login orchestration.
//!
//! `AuthService::login` is the whole login flow: look up the identity, verify
//! the secret against its stored hash, and have the token service issue an
//! access token. The plaintext secret is dropped as soon as verification
//! returns; it is never stored and never logged.

use std::sync::Arc;

use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::models::AuthResult;
use crate::store::{Identity, IdentityStore, StoreError};

use super::password;
use super::token::TokenService;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown username or wrong secret. Deliberately one message for both,
    /// so responses do not reveal which usernames exist.
    #[error("Invalid username or password.")]
    Rejected,

    #[error(transparent)]
    Unavailable(#[from] StoreError),

    #[error("login failed: {0}")]
    Internal(String),
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        match self {
            LoginError::Rejected => ApiError::unauthorized(self.to_string()).into_response(),
            LoginError::Unavailable(e) => {
                tracing::error!(error = %e, "identity store unavailable during login");
                ApiError::unavailable("Identity store unavailable").into_response()
            }
            LoginError::Internal(msg) => {
                tracing::error!(error = %msg, "login failed internally");
                ApiError::internal("Internal server error").into_response()
            }
        }
    }
}

/// Verifies credentials and issues tokens.
#[derive(Clone)]
pub struct AuthService {
    identities: Arc<dyn IdentityStore>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(identities: Arc<dyn IdentityStore>, tokens: Arc<TokenService>) -> Self {
        Self { identities, tokens }
    }

    /// Authenticate and issue an access token.
    ///
    /// `Rejected` covers both unknown username and wrong secret. A store
    /// failure or a corrupt stored hash is never folded into `Rejected`.
    pub fn login(&self, username: &str, secret: &str) -> Result<AuthResult, LoginError> {
        let identity = self.verify(username, secret)?;

        let issued = self
            .tokens
            .issue(&identity)
            .map_err(|e| LoginError::Internal(e.to_string()))?;

        Ok(AuthResult {
            token: issued.token,
            username: identity.username,
            role: identity.role,
            expires_at: issued.expires_at,
        })
    }

    fn verify(&self, username: &str, secret: &str) -> Result<Identity, LoginError> {
        let Some(identity) = self.identities.find_by_username(username)? else {
            return Err(LoginError::Rejected);
        };

        let matches = password::verify_secret(secret, &identity.secret_hash)
            .map_err(|e| LoginError::Internal(e.to_string()))?;

        if matches {
            Ok(identity)
        } else {
            Err(LoginError::Rejected)
        }
    }
}
