//! Schedule model.
//!
//! A schedule maps requirement ids to the sections chosen to satisfy
//! them. It may be partial (manual picks in progress) or complete
//! (one section per non-excluded requirement); the generator only
//! emits complete, conflict-free schedules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::CourseSection;

/// An assignment of sections to requirements.
///
/// Entries are kept in a `BTreeMap` keyed by requirement id, so
/// iteration order and canonical keys are deterministic. The core
/// invariant — no two entries overlap in time — is enforced by the
/// scheduler, not by this container: manual picks may conflict and
/// the UI layer surfaces that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    entries: BTreeMap<String, CourseSection>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a section to a requirement, replacing any previous binding.
    pub fn bind(&mut self, requirement_id: impl Into<String>, section: CourseSection) {
        self.entries.insert(requirement_id.into(), section);
    }

    /// Binds a section as a manual (locked) pick.
    pub fn bind_locked(&mut self, requirement_id: impl Into<String>, section: CourseSection) {
        self.entries.insert(requirement_id.into(), section.locked());
    }

    /// Removes the binding for a requirement, returning it if present.
    pub fn unbind(&mut self, requirement_id: &str) -> Option<CourseSection> {
        self.entries.remove(requirement_id)
    }

    /// The section bound to a requirement, if any.
    pub fn section_for(&self, requirement_id: &str) -> Option<&CourseSection> {
        self.entries.get(requirement_id)
    }

    /// Whether a requirement has a binding.
    pub fn contains(&self, requirement_id: &str) -> bool {
        self.entries.contains_key(requirement_id)
    }

    /// Whether the binding for a requirement is a manual (locked) pick.
    pub fn is_locked(&self, requirement_id: &str) -> bool {
        self.entries
            .get(requirement_id)
            .is_some_and(|s| s.is_locked)
    }

    /// Iterates `(requirement id, section)` entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CourseSection)> {
        self.entries.iter().map(|(id, s)| (id.as_str(), s))
    }

    /// Iterates only the locked entries.
    pub fn locked_entries(&self) -> impl Iterator<Item = (&str, &CourseSection)> {
        self.entries().filter(|(_, s)| s.is_locked)
    }

    /// Drops bindings whose requirement id fails the predicate.
    ///
    /// Used to cascade-remove bindings when requirements are deleted.
    pub fn retain_requirements<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.entries.retain(|id, _| keep(id));
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical identity of this schedule's assignment.
    ///
    /// Entries sorted by requirement id, each rendered as
    /// `requirement_id:subject_code:section_label`, joined with `|`.
    /// Two schedules with the same key bind the same sections to the
    /// same requirements, regardless of how they were produced.
    pub fn canonical_key(&self) -> String {
        self.entries
            .iter()
            .map(|(id, s)| format!("{id}:{}:{}", s.subject_code, s.section_label))
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(code: &str, label: &str) -> CourseSection {
        CourseSection::new(code, label).with_meeting_time("MWF 09:00-10:00")
    }

    #[test]
    fn test_bind_and_lookup() {
        let mut s = Schedule::new();
        s.bind("CS101", section("CS101", "A"));
        assert_eq!(s.len(), 1);
        assert!(s.contains("CS101"));
        assert_eq!(s.section_for("CS101").unwrap().section_label, "A");
        assert!(s.section_for("MATH1").is_none());
    }

    #[test]
    fn test_bind_replaces() {
        let mut s = Schedule::new();
        s.bind("CS101", section("CS101", "A"));
        s.bind("CS101", section("CS101", "B"));
        assert_eq!(s.len(), 1);
        assert_eq!(s.section_for("CS101").unwrap().section_label, "B");
    }

    #[test]
    fn test_locked_binding() {
        let mut s = Schedule::new();
        s.bind_locked("CS101", section("CS101", "A"));
        s.bind("MATH1", section("MATH1", "B"));

        assert!(s.is_locked("CS101"));
        assert!(!s.is_locked("MATH1"));
        assert!(!s.is_locked("ABSENT"));

        let locked: Vec<_> = s.locked_entries().map(|(id, _)| id).collect();
        assert_eq!(locked, vec!["CS101"]);
    }

    #[test]
    fn test_unbind() {
        let mut s = Schedule::new();
        s.bind("CS101", section("CS101", "A"));
        let removed = s.unbind("CS101").unwrap();
        assert_eq!(removed.subject_code, "CS101");
        assert!(s.is_empty());
        assert!(s.unbind("CS101").is_none());
    }

    #[test]
    fn test_retain_requirements_cascades() {
        let mut s = Schedule::new();
        s.bind("CS101", section("CS101", "A"));
        s.bind("MATH1", section("MATH1", "B"));
        s.retain_requirements(|id| id == "CS101");
        assert_eq!(s.len(), 1);
        assert!(s.contains("CS101"));
        assert!(!s.contains("MATH1"));
    }

    #[test]
    fn test_canonical_key_sorted_by_requirement() {
        let mut a = Schedule::new();
        a.bind("MATH1", section("MATH1", "B"));
        a.bind("CS101", section("CS101", "A"));

        // Same bindings inserted in the other order.
        let mut b = Schedule::new();
        b.bind("CS101", section("CS101", "A"));
        b.bind("MATH1", section("MATH1", "B"));

        assert_eq!(a.canonical_key(), b.canonical_key());
        assert_eq!(a.canonical_key(), "CS101:CS101:A|MATH1:MATH1:B");
    }

    #[test]
    fn test_canonical_key_distinguishes_sections() {
        let mut a = Schedule::new();
        a.bind("CS101", section("CS101", "A"));
        let mut b = Schedule::new();
        b.bind("CS101", section("CS101", "B"));
        assert_ne!(a.canonical_key(), b.canonical_key());
    }

    #[test]
    fn test_entries_in_id_order() {
        let mut s = Schedule::new();
        s.bind("PHYS1", section("PHYS1", "C"));
        s.bind("CS101", section("CS101", "A"));
        s.bind("MATH1", section("MATH1", "B"));
        let ids: Vec<_> = s.entries().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["CS101", "MATH1", "PHYS1"]);
    }
}
