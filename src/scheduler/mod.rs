//! Schedule generation: conflict checking, backtracking search, and
//! deduplication.
//!
//! The pipeline is synchronous and pure: requirements, catalog, and the
//! current (possibly partially locked) schedule go in; a deduplicated
//! list of complete, conflict-free schedules comes out. An empty list
//! means no valid combination exists within the explored space — it is
//! never an error.
//!
//! # Usage
//!
//! ```
//! use course_scheduler::models::{Catalog, CourseSection, Requirement, Schedule};
//! use course_scheduler::scheduler::ScheduleGenerator;
//!
//! let catalog = Catalog::from_sections(vec![
//!     CourseSection::new("CS101", "A")
//!         .with_meeting_time("MWF 09:00-10:00")
//!         .with_slots(30),
//! ]);
//! let requirements = vec![Requirement::course("CS101")];
//!
//! let schedules = ScheduleGenerator::new()
//!     .generate(&requirements, &catalog, &Schedule::new());
//! assert_eq!(schedules.len(), 1);
//! ```

mod conflict;
mod dedupe;
mod generator;

pub use conflict::find_conflict;
pub use dedupe::dedupe_schedules;
pub use generator::{ScheduleGenerator, DEFAULT_MAX_RESULTS};
