//! Tokens API client and data models for Sumo Logic.
//!
//! Provides typed structures and an asynchronous client for managing
//! installation tokens (`v1/tokens`), built on the shared `sumologic-core`
//! client.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::TokensClient;
pub use models::{CreateTokenRequest, Token, TokenList, UpdateTokenRequest};

/// Convenient result alias that reuses the shared Sumo Logic error type.
pub type Result<T> = sumologic_core::Result<T>;
