//! Convenience builder for HTTP query parameters.
//!
//! Collects key/value pairs from optional values; the pairs are handed to
//! the client, which percent-encodes them into the request URL. Values never
//! pass through string concatenation, so reserved characters in opaque
//! continuation tokens survive the trip.

use std::fmt::Display;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
