//! Course catalog: ingestion, lookup, and requirement resolution.
//!
//! The catalog holds every known section. Catalog sections come from a
//! JSON feed shaped as `{ "courses": [...] }` with display-style keys
//! ("Subject Code", "Course Title", ...); user-authored custom sections
//! are added directly. Sections are mutated in place (priority,
//! exclusion, details) but never removed once ingested.

use serde::Deserialize;

use super::{CourseSection, Requirement, RequirementKind, DEFAULT_SECTION_PRIORITY};

/// Default priority for user-authored custom sections.
///
/// Lower than catalog sections so a custom class is tried first.
pub const DEFAULT_CUSTOM_PRIORITY: i32 = 50;

/// A course code / title pair for selection lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueCourse {
    /// Subject code.
    pub code: String,
    /// Course title (from the first section seen under the code).
    pub title: String,
}

/// One record of the catalog feed. Keys mirror the upstream JSON.
#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(rename = "Subject Code")]
    subject_code: String,
    #[serde(rename = "Course Title")]
    title: String,
    #[serde(rename = "Section")]
    section: String,
    #[serde(rename = "Time", default)]
    time: String,
    #[serde(rename = "Room", default)]
    room: String,
    #[serde(rename = "Instructor", default)]
    instructor: String,
    #[serde(rename = "Free Slots", alias = "Slots", default)]
    slots: u32,
    #[serde(rename = "Remarks", default)]
    remarks: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    courses: Vec<RawSection>,
}

/// All known sections, catalog-fed and custom.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sections: Vec<CourseSection>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from already-built sections.
    pub fn from_sections(sections: Vec<CourseSection>) -> Self {
        Self { sections }
    }

    /// Ingests the `{ "courses": [...] }` JSON feed.
    ///
    /// Missing "Free Slots"/"Slots" defaults to 0, missing "Remarks"
    /// to empty. Every record starts with the default priority and
    /// is not excluded.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let sections = file
            .courses
            .into_iter()
            .map(|raw| {
                CourseSection::new(raw.subject_code, raw.section)
                    .with_title(raw.title)
                    .with_meeting_time(raw.time)
                    .with_room(raw.room)
                    .with_instructor(raw.instructor)
                    .with_slots(raw.slots)
                    .with_remarks(raw.remarks)
                    .with_priority(DEFAULT_SECTION_PRIORITY)
            })
            .collect();
        Ok(Self { sections })
    }

    /// All sections.
    pub fn sections(&self) -> &[CourseSection] {
        &self.sections
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Adds a user-authored section, tagging it with its owning
    /// requirement's id. Slots and priority default to custom-class
    /// values if the caller left them at section defaults.
    pub fn add_custom_section(&mut self, requirement_id: &str, mut section: CourseSection) {
        section.is_custom = true;
        section.custom_tag = Some(requirement_id.to_string());
        if section.priority == DEFAULT_SECTION_PRIORITY {
            section.priority = DEFAULT_CUSTOM_PRIORITY;
        }
        if section.available_slots == 0 {
            section.available_slots = 99;
        }
        self.sections.push(section);
    }

    /// Finds a section by identity.
    pub fn find_section(&self, subject_code: &str, section_label: &str) -> Option<&CourseSection> {
        self.sections
            .iter()
            .find(|s| s.subject_code == subject_code && s.section_label == section_label)
    }

    fn find_section_mut(
        &mut self,
        subject_code: &str,
        section_label: &str,
    ) -> Option<&mut CourseSection> {
        self.sections
            .iter_mut()
            .find(|s| s.subject_code == subject_code && s.section_label == section_label)
    }

    /// Updates a section's scheduling priority in place.
    ///
    /// Returns false if no section has that identity.
    pub fn set_section_priority(
        &mut self,
        subject_code: &str,
        section_label: &str,
        priority: i32,
    ) -> bool {
        match self.find_section_mut(subject_code, section_label) {
            Some(s) => {
                s.priority = priority;
                true
            }
            None => false,
        }
    }

    /// Updates a section's auto-scheduling exclusion in place.
    ///
    /// Returns false if no section has that identity.
    pub fn set_section_excluded(
        &mut self,
        subject_code: &str,
        section_label: &str,
        excluded: bool,
    ) -> bool {
        match self.find_section_mut(subject_code, section_label) {
            Some(s) => {
                s.excluded = excluded;
                true
            }
            None => false,
        }
    }

    /// Distinct courses in the catalog, ordered by code.
    ///
    /// The title comes from the first section seen under each code.
    pub fn unique_courses(&self) -> Vec<UniqueCourse> {
        let mut courses: Vec<UniqueCourse> = Vec::new();
        for s in &self.sections {
            if !courses.iter().any(|c| c.code == s.subject_code) {
                courses.push(UniqueCourse {
                    code: s.subject_code.clone(),
                    title: s.title.clone(),
                });
            }
        }
        courses.sort_by(|a, b| a.code.cmp(&b.code));
        courses
    }

    /// Resolves a requirement to its candidate sections.
    ///
    /// Course requirements match the subject code, group requirements
    /// take the union over member codes, and custom requirements match
    /// custom sections tagged with the requirement's id. No filtering
    /// by exclusion or slots happens here — manual-selection views need
    /// to see every section; the scheduler filters its own candidates.
    pub fn sections_for(&self, requirement: &Requirement) -> Vec<&CourseSection> {
        match requirement.kind {
            RequirementKind::Course => self
                .sections
                .iter()
                .filter(|s| s.subject_code == requirement.id)
                .collect(),
            RequirementKind::Group => self
                .sections
                .iter()
                .filter(|s| requirement.member_codes.contains(&s.subject_code))
                .collect(),
            RequirementKind::Custom => self
                .sections
                .iter()
                .filter(|s| {
                    s.is_custom && s.custom_tag.as_deref() == Some(requirement.id.as_str())
                })
                .collect(),
        }
    }
}
