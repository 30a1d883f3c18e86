//! Constraint-based weekly class scheduling.
//!
//! Builds conflict-free weekly schedules from a catalog of course
//! sections, given required courses (or groups of interchangeable
//! courses), manual section locks, and per-section priorities and
//! exclusions. The chosen schedule can be exported as an iCalendar
//! file of weekly-recurring events.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CourseSection`, `Requirement`,
//!   `Schedule`, `Catalog`, meeting-time parsing (`Day`, `TimeInterval`)
//! - **`scheduler`**: Conflict checking, backtracking enumeration of
//!   complete schedules, deduplication
//! - **`validation`**: Structural input checks (duplicate identities,
//!   dangling course references, empty groups)
//! - **`export`**: iCalendar rendering of a chosen schedule over a
//!   date range
//!
//! # Design
//!
//! The core is pure and synchronous: every call operates on its own
//! snapshot of catalog, requirements, and locks, and returns explicit
//! results. "No schedules found" is an empty list, never an error.
//! Search is exhaustive up to a result cap (default 100); priorities
//! only steer exploration order.

pub mod export;
pub mod models;
pub mod scheduler;
pub mod validation;
