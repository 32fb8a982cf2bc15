//! Partitions API client and data models for Sumo Logic.
//!
//! Provides typed structures and an asynchronous client for managing
//! partitions (`v1/partitions`), built on the shared `sumologic-core` client.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::PartitionsClient;
pub use models::{
    CreatePartitionRequest, ListPartitionsParams, Partition, PartitionPage,
    UpdatePartitionRequest,
};

/// Convenient result alias that reuses the shared Sumo Logic error type.
pub type Result<T> = sumologic_core::Result<T>;
