// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! # Identity & Access Control
//!
//! Everything between a request and a handler: credential verification,
//! token issuance, token validation, and the per-route authorization policy.
//!
//! ## Auth Flow
//!
//! 1. Client calls `POST /api/auth/login` with username and secret
//! 2. [`service::AuthService`] verifies the secret against the stored
//!    Argon2id hash and has [`token::TokenService`] issue an HS256 JWT
//!    (24 h lifetime, issuer/audience stamped)
//! 3. Client sends `Authorization: Bearer <token>` on later requests
//! 4. [`policy::enforce_policy`] middleware consults the route policy table;
//!    non-public routes validate the token (zero clock-skew leeway) and
//!    check the exact role requirement
//!
//! ## Security
//!
//! - Secrets are stored only as salted Argon2id hashes
//! - Tokens are stateless; validity is signature + embedded expiry, nothing
//!   is looked up server-side per request
//! - Role checks are exact matches against a closed enum; there is no
//!   privilege hierarchy
//! - Routes not present in the policy table are denied

pub mod claims;
pub mod error;
pub mod password;
pub mod policy;
pub mod roles;
pub mod service;
pub mod token;

pub use claims::AuthenticatedUser;
pub use error::AuthError;
pub use policy::{enforce_policy, Access, PolicyTable};
pub use roles::Role;
pub use service::{AuthService, LoginError};
pub use token::{IssuedToken, TokenService, TOKEN_LIFETIME_SECS};
