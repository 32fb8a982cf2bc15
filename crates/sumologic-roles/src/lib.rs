//! Roles API client and data models for Sumo Logic.
//!
//! Provides typed structures and an asynchronous client for managing roles
//! (`v1/roles`), plus the capability-diff helper used to reconcile a role's
//! fine-grained capability set against a desired state.

#![deny(missing_docs)]

pub mod client;
pub mod diff;
pub mod models;

pub use client::RolesClient;
pub use diff::{capability_diff, CapabilityDiff};
pub use models::{Role, RoleDefinition, RolePage};

/// Convenient result alias that reuses the shared Sumo Logic error type.
pub type Result<T> = sumologic_core::Result<T>;
