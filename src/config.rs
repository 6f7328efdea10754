// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! # Runtime Configuration
//!
//! Configuration is read from the environment exactly once, at startup. A
//! missing or weak signing secret is fatal: the process exits before binding
//! the listener rather than serving tokens signed with a guessable key.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `JWT_SECRET` | HMAC key for access tokens | Required, at least 32 bytes |
//! | `JWT_ISSUER` | Issuer stamped into and required of tokens | `registrar` |
//! | `JWT_AUDIENCE` | Audience stamped into and required of tokens | `registrar-clients` |
//! | `SEED_USERNAME` | Username of the identity seeded at startup | unset |
//! | `SEED_SECRET` | Secret of the seeded identity (hashed, then dropped) | unset |
//! | `SEED_ROLE` | Role of the seeded identity | `Admin` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::env;

use crate::auth::Role;

/// Minimum length of the HMAC signing secret, in bytes.
pub const MIN_SECRET_BYTES: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET is too short: {0} bytes, need at least 32")]
    WeakSecret(usize),

    #[error("SEED_USERNAME and SEED_SECRET must be set together")]
    PartialSeed,

    #[error("SEED_ROLE '{0}' is not one of Admin, Teacher, User")]
    InvalidSeedRole(String),
}

/// Identity inserted into the identity store at startup.
#[derive(Debug, Clone)]
pub struct SeedIdentity {
    pub username: String,
    pub secret: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub seed: Option<SeedIdentity>,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = validate_secret(non_empty(env::var("JWT_SECRET").ok()))?;

        let seed = seed_from(
            non_empty(env::var("SEED_USERNAME").ok()),
            non_empty(env::var("SEED_SECRET").ok()),
            non_empty(env::var("SEED_ROLE").ok()),
        )?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_secret,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "registrar".to_string()),
            jwt_audience: env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "registrar-clients".to_string()),
            seed,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The secret must be present and long enough for HMAC-SHA-256 use.
fn validate_secret(secret: Option<String>) -> Result<String, ConfigError> {
    let secret = secret.ok_or(ConfigError::MissingSecret)?;
    if secret.len() < MIN_SECRET_BYTES {
        return Err(ConfigError::WeakSecret(secret.len()));
    }
    Ok(secret)
}

/// Assemble the seed identity, if any.
///
/// Username and secret must come as a pair. An unparseable role is a startup
/// error, not a silent default: a typo here must never grant the wrong role.
fn seed_from(
    username: Option<String>,
    secret: Option<String>,
    role: Option<String>,
) -> Result<Option<SeedIdentity>, ConfigError> {
    let (username, secret) = match (username, secret) {
        (Some(u), Some(s)) => (u, s),
        (None, None) => return Ok(None),
        _ => return Err(ConfigError::PartialSeed),
    };

    let role = match role {
        Some(name) => Role::from_str(&name).ok_or(ConfigError::InvalidSeedRole(name))?,
        None => Role::Admin,
    };

    Ok(Some(SeedIdentity {
        username,
        secret,
        role,
    }))
}
