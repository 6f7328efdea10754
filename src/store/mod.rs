// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! In-memory persistence.
//!
//! Two stores with different lifecycles:
//!
//! - [`identities`]: login identities, seeded at startup and read-only
//!   afterwards, behind a trait so an unavailable backend is expressible.
//! - [`school`]: the mutable student/teacher/course/class/exam registry
//!   served by the CRUD endpoints.

pub mod identities;
pub mod school;

pub use identities::{Identity, IdentityStore, InMemoryIdentities, StoreError};
pub use school::SchoolRegistry;
