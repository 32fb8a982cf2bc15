//! # sumologic-core
//!
//! Core HTTP client for the Sumo Logic REST API.
//!
//! This crate provides the generic client the per-service crates are built
//! on: authentication, client-side rate limiting, error-envelope decoding,
//! and the ETag/`If-Match` optimistic-concurrency update path.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and API error envelope decoding
//! - [`config`] - Credentials, deployment (region) table, connection settings
//! - [`limit`] - Fixed-interval outbound rate limiting
//! - [`lock`] - Per-path lock set serializing optimistic updates
//! - [`query`] - Query parameter assembly
//! - [`client`] - The generic request client

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod limit;
pub mod lock;
pub mod query;

// Re-export commonly used types
pub use client::{Client, ClientBuilder, RawResponse};
pub use config::{ConnectionConfig, Credentials, Deployment};
pub use error::{ApiError, Error, Result};
pub use limit::{IntervalLimiter, RateLimit, DEFAULT_RATE_PER_MINUTE};
pub use lock::PathLocks;
pub use query::QueryParams;
