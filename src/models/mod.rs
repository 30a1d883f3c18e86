//! Class-scheduling domain models.
//!
//! Provides the core data types for building a weekly class schedule
//! from a catalog of course sections: sections, requirements, meeting
//! times, schedules, and the catalog itself.
//!
//! # Vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`CourseSection`] | One concrete offering (time/room/instructor) of a course |
//! | [`Requirement`] | An obligation to place exactly one section in the schedule |
//! | [`Schedule`] | Mapping requirement id → chosen section |
//! | [`TimeInterval`] | One weekly meeting occurrence (day + minutes) |
//! | [`Catalog`] | All known sections, catalog-fed and custom |

mod catalog;
mod meeting;
mod requirement;
mod schedule;
mod section;

pub use catalog::{Catalog, UniqueCourse, DEFAULT_CUSTOM_PRIORITY};
pub use meeting::{
    parse_meeting_clauses, parse_meeting_times, Day, MeetingClause, TimeInterval,
};
pub use requirement::{Requirement, RequirementKind, DEFAULT_REQUIREMENT_PRIORITY};
pub use schedule::Schedule;
pub use section::{CourseSection, DEFAULT_SECTION_PRIORITY};
