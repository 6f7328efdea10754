// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! Registrar - School Records API
//!
//! This crate provides a school record-management service: students, teachers,
//! courses, classes and exam results behind JWT bearer authentication with a
//! static per-route role policy.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Credential verification, token issuance/validation, route policy
//! - `store` - In-memory identity and school-record stores
//! - `config` - Environment-derived runtime configuration

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
