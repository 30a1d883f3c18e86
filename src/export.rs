//! iCalendar export of a chosen schedule.
//!
//! Turns each bound section's meeting clauses into weekly-recurring
//! VEVENTs over a user-given date range. Sections with TBA or
//! unparseable times are skipped; the export only fails when the date
//! range is inverted or nothing at all is exportable.
//!
//! Times are emitted as floating local times (no TZID), matching how
//! the timetable is read: "9:00" means 9:00 wherever the student is.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Schedule;

/// Errors surfaced by [`export_ics`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The schedule period ends before it starts.
    #[error("schedule period ends before it starts ({start} to {end})")]
    InvalidDateRange {
        /// First day of the period.
        start: NaiveDate,
        /// Last day of the period.
        end: NaiveDate,
    },
    /// Every section was TBA or unparseable; nothing to export.
    #[error("no exportable events in the schedule")]
    NoEvents,
}

/// Renders a schedule as an iCalendar (`.ics`) document.
///
/// One VEVENT per (section, meeting clause): first occurrence on
/// `start_date` at the clause's times, recurring weekly on the clause's
/// days until `end_date` inclusive. Lines use CRLF endings as RFC 5545
/// requires.
pub fn export_ics(
    schedule: &Schedule,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<String, ExportError> {
    if end_date < start_date {
        return Err(ExportError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }

    let date_stamp = start_date.format("%Y%m%d").to_string();
    let until = end_date.format("%Y%m%d").to_string();

    let mut events = Vec::new();
    for (_, section) in schedule.entries() {
        for (clause_index, clause) in section.meeting_clauses().iter().enumerate() {
            if clause.days.is_empty() {
                continue;
            }
            let by_day = clause
                .days
                .iter()
                .map(|d| d.ics_code())
                .collect::<Vec<_>>()
                .join(",");

            let mut event = Vec::new();
            event.push("BEGIN:VEVENT".to_string());
            event.push(format!(
                "UID:{}-{}-{}@course-scheduler",
                section.subject_code, section.section_label, clause_index
            ));
            event.push(format!("DTSTAMP:{date_stamp}T000000"));
            event.push(format!(
                "DTSTART:{date_stamp}T{}",
                format_clock(clause.start_minutes)
            ));
            event.push(format!(
                "DTEND:{date_stamp}T{}",
                format_clock(clause.end_minutes)
            ));
            event.push(format!("RRULE:FREQ=WEEKLY;BYDAY={by_day};UNTIL={until}"));
            event.push(format!(
                "SUMMARY:{}",
                escape_text(&format!(
                    "{} ({})",
                    section.subject_code, section.section_label
                ))
            ));
            event.push(format!(
                "DESCRIPTION:{}",
                escape_text(&format!(
                    "{}\nInstructor: {}",
                    section.title, section.instructor
                ))
            ));
            event.push(format!("LOCATION:{}", escape_text(&section.room)));
            event.push("END:VEVENT".to_string());
            events.push(event.join("\r\n"));
        }
    }

    if events.is_empty() {
        return Err(ExportError::NoEvents);
    }

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//course-scheduler//EN".to_string(),
    ];
    lines.extend(events);
    lines.push("END:VCALENDAR".to_string());

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    Ok(out)
}

fn format_clock(minutes: u16) -> String {
    format!("{:02}{:02}00", minutes / 60, minutes % 60)
}

/// Escapes TEXT values per RFC 5545: backslash, comma, semicolon, newline.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}
