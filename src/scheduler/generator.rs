//! Backtracking schedule generator.
//!
//! # Algorithm
//!
//! 1. Partition requirements into locked (the current schedule pins a
//!    section for them) and to-schedule; excluded requirements are
//!    skipped entirely.
//! 2. Stable-sort the to-schedule list ascending by priority.
//! 3. Resolve each requirement's candidates, drop excluded and
//!    zero-slot sections, stable-sort ascending by section priority.
//! 4. Depth-first search: at each requirement, try candidates in order,
//!    committing one only if it conflicts with nothing already placed,
//!    then recurse; unbind on return.
//! 5. Record a complete schedule when every requirement is placed; stop
//!    once the result cap is hit.
//! 6. Deduplicate before returning.
//!
//! Priority steers exploration order (which solutions are found first),
//! not correctness: the search is exhaustive within the cap.
//!
//! # Complexity
//! Worst case is exponential in the number of requirements (all
//! candidates mutually compatible); the result cap is the only bound.
//! Callers needing responsiveness must limit their inputs.

use crate::models::{Catalog, CourseSection, Requirement, Schedule};

use super::conflict::find_conflict;
use super::dedupe::dedupe_schedules;

/// Default cap on the number of generated schedules.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Enumerates complete, conflict-free schedules by backtracking search.
///
/// # Example
///
/// ```
/// use course_scheduler::models::{Catalog, CourseSection, Requirement, Schedule};
/// use course_scheduler::scheduler::ScheduleGenerator;
///
/// let catalog = Catalog::from_sections(vec![
///     CourseSection::new("CS101", "A")
///         .with_meeting_time("MWF 09:00-10:00")
///         .with_slots(30),
///     CourseSection::new("CS101", "B")
///         .with_meeting_time("TTH 09:00-10:30")
///         .with_slots(30),
/// ]);
/// let requirements = vec![Requirement::course("CS101")];
///
/// let generator = ScheduleGenerator::new();
/// let schedules = generator.generate(&requirements, &catalog, &Schedule::new());
/// assert_eq!(schedules.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    max_results: usize,
}

impl ScheduleGenerator {
    /// Creates a generator with the default result cap.
    pub fn new() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Sets the result cap.
    ///
    /// Hitting the cap is not an error; it means "at least this many
    /// schedules exist, possibly more."
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Generates complete, conflict-free, deduplicated schedules.
    ///
    /// `current` supplies the user's manual picks: entries marked
    /// locked are carried into every result unchanged, and their
    /// requirements are not searched. Unlocked entries in `current`
    /// are ignored — the generator replaces them wholesale.
    ///
    /// Cannot fail: an empty result means no conflict-free combination
    /// exists within the explored space.
    pub fn generate(
        &self,
        requirements: &[Requirement],
        catalog: &Catalog,
        current: &Schedule,
    ) -> Vec<Schedule> {
        let mut locked = Schedule::new();
        let mut to_schedule: Vec<&Requirement> = Vec::new();

        for req in requirements {
            if req.excluded {
                continue;
            }
            match current.section_for(&req.id) {
                Some(section) if section.is_locked => {
                    locked.bind(&req.id, section.clone());
                }
                _ => to_schedule.push(req),
            }
        }

        // Stable sort: ties keep their declaration order.
        to_schedule.sort_by_key(|r| r.priority);

        let candidates: Vec<Vec<&CourseSection>> = to_schedule
            .iter()
            .map(|req| {
                let mut sections: Vec<&CourseSection> = catalog
                    .sections_for(req)
                    .into_iter()
                    .filter(|s| !s.excluded && s.available_slots > 0)
                    .collect();
                sections.sort_by_key(|s| s.priority);
                sections
            })
            .collect();

        let mut results = Vec::new();
        let mut working = locked;
        self.search(0, &to_schedule, &candidates, &mut working, &mut results);

        dedupe_schedules(results)
    }

    fn search(
        &self,
        index: usize,
        requirements: &[&Requirement],
        candidates: &[Vec<&CourseSection>],
        working: &mut Schedule,
        results: &mut Vec<Schedule>,
    ) {
        if results.len() >= self.max_results {
            return;
        }
        if index == requirements.len() {
            results.push(working.clone());
            return;
        }

        let requirement = requirements[index];
        for &section in &candidates[index] {
            if find_conflict(section, working, Some(&requirement.id)).is_none() {
                working.bind(&requirement.id, section.clone());
                self.search(index + 1, requirements, candidates, working, results);
                working.unbind(&requirement.id);
            }
        }
    }
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
