//! Reconciliation helper for a role's capability set.
//!
//! Declarative callers know the capabilities a role *should* have; the API
//! reports what it currently has. The diff yields the minimal additions and
//! removals to converge, so a caller never blindly replaces the whole set.

use std::collections::HashSet;

/// The changes needed to turn one capability set into another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityDiff {
    /// Capabilities present in the desired set but not the current one,
    /// in desired order.
    pub to_add: Vec<String>,
    /// Capabilities present in the current set but not the desired one,
    /// in current order.
    pub to_remove: Vec<String>,
}

impl CapabilityDiff {
    /// True when the sets already match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute the difference between a role's current and desired capabilities.
///
/// Duplicates within either input are ignored; comparison is exact string
/// equality (capability names are case-sensitive in the API).
#[must_use]
pub fn capability_diff(current: &[String], desired: &[String]) -> CapabilityDiff {
    let current_set: HashSet<&str> = current.iter().map(String::as_str).collect();
    let desired_set: HashSet<&str> = desired.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let to_add = desired
        .iter()
        .filter(|cap| !current_set.contains(cap.as_str()) && seen.insert(cap.as_str()))
        .cloned()
        .collect();

    let mut seen = HashSet::new();
    let to_remove = current
        .iter()
        .filter(|cap| !desired_set.contains(cap.as_str()) && seen.insert(cap.as_str()))
        .cloned()
        .collect();

    CapabilityDiff { to_add, to_remove }
}
