// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! JWT claims and authenticated user representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::AuthError;
use super::roles::Role;

/// Claims carried in an access token.
///
/// The set is fixed at issue time and covers everything the server needs to
/// make an authorization decision after validation; nothing is looked up
/// server-side per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the numeric user id, stringified per RFC 7519
    pub sub: String,

    /// Username the token was issued to
    pub username: String,

    /// Role held at issue time
    pub role: Role,

    /// Always "access". Inert today; reserved so refresh tokens can be
    /// told apart if they are ever introduced.
    pub token_use: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,

    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

/// Authenticated user information extracted from a validated token.
///
/// This is the primary type used throughout the application to represent
/// the authenticated user making a request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Numeric user id (`sub` claim)
    pub user_id: i64,

    /// Username
    pub username: String,

    /// Role held at issue time
    pub role: Role,

    /// Token expiration (Unix timestamp, not serialized)
    #[serde(skip)]
    pub expires_at: i64,
}

impl AuthenticatedUser {
    /// Build from already-verified claims.
    ///
    /// The signature and envelope checks happen before this; the only thing
    /// left to go wrong is a `sub` that does not hold a numeric id, which is
    /// treated the same as any other malformed token.
    pub fn from_claims(claims: TokenClaims) -> Result<Self, AuthError> {
        let user_id: i64 = claims.sub.parse().map_err(|_| AuthError::MalformedToken)?;

        Ok(Self {
            user_id,
            username: claims.username,
            role: claims.role,
            expires_at: claims.exp,
        })
    }
}
