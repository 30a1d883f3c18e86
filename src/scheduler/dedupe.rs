//! Schedule deduplication.
//!
//! Depth-first search can reach the same assignment along different
//! paths when requirement-order ties are broken differently upstream;
//! this pass guarantees the returned list is a set of distinct
//! schedules.

use std::collections::HashSet;

use crate::models::Schedule;

/// Removes schedules whose canonical key was already seen.
///
/// First occurrence wins; relative order is otherwise preserved.
/// Idempotent: deduplicating twice changes nothing.
pub fn dedupe_schedules(schedules: Vec<Schedule>) -> Vec<Schedule> {
    let mut seen = HashSet::new();
    schedules
        .into_iter()
        .filter(|s| seen.insert(s.canonical_key()))
        .collect()
}
