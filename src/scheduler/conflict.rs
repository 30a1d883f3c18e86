//! Pairwise time-conflict detection between a candidate section and a
//! schedule in progress.

use crate::models::{CourseSection, Schedule};

/// Finds the first section in `current` whose meeting times overlap the
/// candidate's, skipping the entry for `ignore_requirement`.
///
/// A candidate with no parseable meeting times (TBA, empty, malformed)
/// never conflicts. Any conflicting entry is a valid witness; which one
/// is returned depends on the schedule's id order. Pure function, no
/// side effects.
pub fn find_conflict<'a>(
    candidate: &CourseSection,
    current: &'a Schedule,
    ignore_requirement: Option<&str>,
) -> Option<&'a CourseSection> {
    let candidate_times = candidate.meeting_times();
    if candidate_times.is_empty() {
        return None;
    }

    for (requirement_id, section) in current.entries() {
        if Some(requirement_id) == ignore_requirement {
            continue;
        }
        for existing in section.meeting_times() {
            if candidate_times.iter().any(|t| t.overlaps(&existing)) {
                return Some(section);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseSection;

    fn section(code: &str, label: &str, time: &str) -> CourseSection {
        CourseSection::new(code, label).with_meeting_time(time)
    }

    #[test]
    fn test_no_conflict_on_empty_schedule() {
        let candidate = section("CS101", "A", "MWF 09:00-10:00");
        assert!(find_conflict(&candidate, &Schedule::new(), None).is_none());
    }

    #[test]
    fn test_overlap_detected() {
        let mut current = Schedule::new();
        current.bind("MATH1", section("MATH1", "A", "MWF 09:00-10:00"));

        let candidate = section("PHYS1", "A", "MWF 09:30-10:30");
        let witness = find_conflict(&candidate, &current, None).unwrap();
        assert_eq!(witness.subject_code, "MATH1");
    }

    #[test]
    fn test_back_to_back_is_not_a_conflict() {
        let mut current = Schedule::new();
        current.bind("MATH1", section("MATH1", "A", "MWF 09:00-10:00"));

        let candidate = section("PHYS1", "A", "MWF 10:00-11:00");
        assert!(find_conflict(&candidate, &current, None).is_none());
    }

    #[test]
    fn test_different_days_do_not_conflict() {
        let mut current = Schedule::new();
        current.bind("MATH1", section("MATH1", "A", "MWF 09:00-10:00"));

        let candidate = section("PHYS1", "A", "TTH 09:00-10:00");
        assert!(find_conflict(&candidate, &current, None).is_none());
    }

    #[test]
    fn test_ignored_requirement_skipped() {
        let mut current = Schedule::new();
        current.bind("CS101", section("CS101", "A", "MWF 09:00-10:00"));

        // Re-evaluating CS101 against itself must not self-conflict.
        let candidate = section("CS101", "B", "MWF 09:00-10:00");
        assert!(find_conflict(&candidate, &current, Some("CS101")).is_none());
        assert!(find_conflict(&candidate, &current, None).is_some());
    }

    #[test]
    fn test_tba_candidate_never_conflicts() {
        let mut current = Schedule::new();
        current.bind("MATH1", section("MATH1", "A", "MWF 09:00-10:00"));

        let candidate = section("THESIS1", "A", "TBA");
        assert!(find_conflict(&candidate, &current, None).is_none());
    }

    #[test]
    fn test_tba_entry_never_witnesses() {
        let mut current = Schedule::new();
        current.bind("THESIS1", section("THESIS1", "A", "TBA"));

        let candidate = section("MATH1", "A", "MWF 09:00-10:00");
        assert!(find_conflict(&candidate, &current, None).is_none());
    }

    #[test]
    fn test_multi_clause_conflict() {
        // Lecture is clear, lab clashes.
        let mut current = Schedule::new();
        current.bind("CHEM1", section("CHEM1", "A", "T 13:00-16:00"));

        let candidate = section("BIO1", "A", "MW 09:00-10:00; T 14:00-17:00");
        assert!(find_conflict(&candidate, &current, None).is_some());
    }
}
