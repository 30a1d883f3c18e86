//! Input validation for scheduling requests.
//!
//! Checks structural integrity of the catalog and requirement list
//! before scheduling. Detects:
//! - Duplicate section identities and requirement ids
//! - Group requirements with no member courses
//! - Requirements referencing course codes with no catalog sections
//!
//! Unknown-code findings are advisory: the generator tolerates dangling
//! references as empty candidate lists, but surfacing them early gives
//! the UI something better than a silent "no schedules found."

use std::collections::HashSet;

use crate::models::{Catalog, Requirement, RequirementKind};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identity.
    DuplicateId,
    /// A requirement references a course code with no catalog sections.
    UnknownCourseCode,
    /// A group requirement has no member courses.
    EmptyGroup,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog and requirement list.
///
/// Checks:
/// 1. No duplicate (subject code, section label) identities
/// 2. No duplicate requirement ids
/// 3. Every group requirement has at least one member course
/// 4. Every referenced course code has at least one catalog section
///    (for custom requirements: at least one tagged custom section)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(catalog: &Catalog, requirements: &[Requirement]) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect section identities and known course codes
    let mut identities = HashSet::new();
    let mut course_codes = HashSet::new();
    for s in catalog.sections() {
        if !identities.insert((s.subject_code.as_str(), s.section_label.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate section identity: {}", s.identity()),
            ));
        }
        course_codes.insert(s.subject_code.as_str());
    }

    let mut requirement_ids = HashSet::new();
    for req in requirements {
        if !requirement_ids.insert(req.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate requirement id: {}", req.id),
            ));
        }

        match req.kind {
            RequirementKind::Course => {
                if !course_codes.contains(req.id.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownCourseCode,
                        format!("Requirement '{}' has no catalog sections", req.id),
                    ));
                }
            }
            RequirementKind::Group => {
                if req.member_codes.is_empty() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::EmptyGroup,
                        format!("Group '{}' has no member courses", req.display_name),
                    ));
                }
                for code in &req.member_codes {
                    if !course_codes.contains(code.as_str()) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::UnknownCourseCode,
                            format!(
                                "Group '{}' references unknown course '{}'",
                                req.display_name, code
                            ),
                        ));
                    }
                }
            }
            RequirementKind::Custom => {
                if catalog.sections_for(req).is_empty() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownCourseCode,
                        format!("Custom requirement '{}' has no sections", req.display_name),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
