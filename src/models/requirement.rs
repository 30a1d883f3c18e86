//! Requirement model.
//!
//! A requirement is a scheduling obligation the user wants satisfied:
//! a single course, a named group of interchangeable courses, or a
//! custom ad hoc class. Exactly one section satisfies a requirement in
//! any given schedule.

use serde::{Deserialize, Serialize};

/// Default scheduling priority for requirements (lower = scheduled first).
pub const DEFAULT_REQUIREMENT_PRIORITY: i32 = 100;

/// What kind of obligation a requirement represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementKind {
    /// A single course; any of its sections satisfies the requirement.
    Course,
    /// A named group of course codes; any section under any member
    /// course satisfies the requirement.
    Group,
    /// A user-authored class with its own custom sections.
    Custom,
}

/// A scheduling obligation to be satisfied by exactly one section.
///
/// The id is the course code itself for single courses, and a
/// caller-generated synthetic id for groups and custom classes.
/// Removing a requirement must also remove any schedule binding for
/// its id (see [`Schedule::retain_requirements`](super::Schedule::retain_requirements)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Unique id: course code, or a synthetic group/custom id.
    pub id: String,
    /// Requirement kind.
    pub kind: RequirementKind,
    /// Display name (course code or group name).
    pub display_name: String,
    /// Member course codes; only populated for [`RequirementKind::Group`].
    pub member_codes: Vec<String>,
    /// Scheduling priority; lower values are scheduled first.
    pub priority: i32,
    /// Whether the automatic scheduler should skip this requirement.
    pub excluded: bool,
}

impl Requirement {
    /// Creates a single-course requirement; the course code is the id.
    pub fn course(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            id: code.clone(),
            kind: RequirementKind::Course,
            display_name: code,
            member_codes: Vec::new(),
            priority: DEFAULT_REQUIREMENT_PRIORITY,
            excluded: false,
        }
    }

    /// Creates a group requirement over several course codes.
    pub fn group(
        id: impl Into<String>,
        name: impl Into<String>,
        member_codes: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: RequirementKind::Group,
            display_name: name.into(),
            member_codes,
            priority: DEFAULT_REQUIREMENT_PRIORITY,
            excluded: false,
        }
    }

    /// Creates a custom-class requirement with a synthetic id.
    pub fn custom(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: RequirementKind::Custom,
            display_name: name.into(),
            member_codes: Vec::new(),
            priority: DEFAULT_REQUIREMENT_PRIORITY,
            excluded: false,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the requirement as excluded from automatic scheduling.
    pub fn with_excluded(mut self, excluded: bool) -> Self {
        self.excluded = excluded;
        self
    }
}
