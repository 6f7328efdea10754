// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! Token issuance and validation.
//!
//! Access tokens are HS256 JWTs signed with a single shared secret. The
//! service both issues and validates them, so issuer and audience are stamped
//! on the way out and checked on the way in with the same configured values.
//!
//! Validation runs with zero leeway: a token is accepted up to and including
//! its `exp` second and rejected from the next second on, regardless of any
//! clock-skew tolerance a library default would grant.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::{AuthenticatedUser, TokenClaims};
use super::error::AuthError;
use crate::store::Identity;

/// Access token lifetime: 24 hours.
pub const TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

/// An issued token plus the expiry it carries.
///
/// `expires_at` is derived from the `exp` claim itself, so what a client is
/// told never drifts from what validation will enforce.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates HS256 access tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    validation: Validation,
}

impl TokenService {
    /// Build a service around a shared secret.
    ///
    /// Secret strength is enforced at configuration load, not here.
    pub fn new(secret: &str, issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        let issuer = issuer.into();
        let audience = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        // No clock-skew tolerance. The crate default is 60 seconds.
        validation.leeway = 0;
        validation.set_issuer(&[&issuer]);
        validation.set_audience(&[&audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            validation,
        }
    }

    /// Issue an access token for an identity.
    pub fn issue(&self, identity: &Identity) -> Result<IssuedToken, AuthError> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    /// Issue with an explicit issued-at second.
    ///
    /// The claim set is a pure function of (identity, issued_at): two logins
    /// in the same second produce byte-identical tokens.
    fn issue_at(&self, identity: &Identity, issued_at: i64) -> Result<IssuedToken, AuthError> {
        let exp = issued_at + TOKEN_LIFETIME_SECS;

        let claims = TokenClaims {
            sub: identity.user_id.to_string(),
            username: identity.username.clone(),
            role: identity.role,
            token_use: "access".to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: issued_at,
            exp,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))?;

        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AuthError::TokenCreation("expiry out of range".to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Validate a token and extract the authenticated user.
    ///
    /// Checks, in order: signature, expiry (zero leeway), issuer, audience,
    /// required claims, and finally that `iat` is not in the future.
    pub fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
                jsonwebtoken::errors::ErrorKind::InvalidAudience => AuthError::InvalidAudience,
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
                _ => AuthError::MalformedToken,
            })?;

        let claims = token_data.claims;

        // jsonwebtoken only checks nbf, which we never stamp. A token that
        // claims to be issued in the future is rejected the same way.
        if claims.iat > Utc::now().timestamp() {
            return Err(AuthError::TokenNotYetValid);
        }

        AuthenticatedUser::from_claims(claims)
    }
}
