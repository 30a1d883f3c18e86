//! Course section model.
//!
//! A section is one concrete offering of a course: a specific meeting
//! time, room, and instructor under a (subject code, section label)
//! identity. Sections are created by catalog ingestion or, for custom
//! classes, by the user, and are never removed from the catalog.

use serde::{Deserialize, Serialize};

use super::meeting::{parse_meeting_clauses, parse_meeting_times, MeetingClause, TimeInterval};

/// Default scheduling priority for catalog sections (lower = scheduled first).
pub const DEFAULT_SECTION_PRIORITY: i32 = 100;

/// One offering of a course.
///
/// Identified by `(subject_code, section_label)`, unique together.
/// `priority` and `excluded` steer the automatic scheduler; `is_locked`
/// is only meaningful once the section is bound into a schedule and
/// means the user pinned it manually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSection {
    /// Course code, e.g. "CS101".
    pub subject_code: String,
    /// Section label within the course, e.g. "A" or "01".
    pub section_label: String,
    /// Course title.
    pub title: String,
    /// Free-form meeting-time text; may be empty or "TBA".
    pub meeting_time_text: String,
    /// Room assignment.
    pub room: String,
    /// Instructor name.
    pub instructor: String,
    /// Remaining enrollment slots.
    pub available_slots: u32,
    /// Free-text remarks.
    pub remarks: String,
    /// Scheduling priority; lower values are tried first.
    pub priority: i32,
    /// Whether the automatic scheduler should skip this section.
    pub excluded: bool,
    /// User-authored section, not from the catalog feed.
    pub is_custom: bool,
    /// User manually pinned this section; the scheduler must not replace it.
    pub is_locked: bool,
    /// Owning requirement id for custom sections.
    pub custom_tag: Option<String>,
}

impl CourseSection {
    /// Creates a section with the given identity and default metadata.
    pub fn new(subject_code: impl Into<String>, section_label: impl Into<String>) -> Self {
        Self {
            subject_code: subject_code.into(),
            section_label: section_label.into(),
            title: String::new(),
            meeting_time_text: String::new(),
            room: String::new(),
            instructor: String::new(),
            available_slots: 0,
            remarks: String::new(),
            priority: DEFAULT_SECTION_PRIORITY,
            excluded: false,
            is_custom: false,
            is_locked: false,
            custom_tag: None,
        }
    }

    /// Sets the course title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the meeting-time text.
    pub fn with_meeting_time(mut self, text: impl Into<String>) -> Self {
        self.meeting_time_text = text.into();
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the number of available slots.
    pub fn with_slots(mut self, slots: u32) -> Self {
        self.available_slots = slots;
        self
    }

    /// Sets the remarks.
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the section as excluded from automatic scheduling.
    pub fn with_excluded(mut self, excluded: bool) -> Self {
        self.excluded = excluded;
        self
    }

    /// Marks the section as manually pinned.
    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Display identity, e.g. "CS101-A".
    pub fn identity(&self) -> String {
        format!("{}-{}", self.subject_code, self.section_label)
    }

    /// Whether another section is the same offering.
    pub fn same_identity(&self, other: &CourseSection) -> bool {
        self.subject_code == other.subject_code && self.section_label == other.section_label
    }

    /// Weekly meeting intervals parsed from the meeting-time text.
    ///
    /// Empty for TBA or unparseable text; such sections never conflict.
    pub fn meeting_times(&self) -> Vec<TimeInterval> {
        parse_meeting_times(&self.meeting_time_text)
    }

    /// Meeting clauses (day groups sharing a time range), for export.
    pub fn meeting_clauses(&self) -> Vec<MeetingClause> {
        parse_meeting_clauses(&self.meeting_time_text)
    }
}
