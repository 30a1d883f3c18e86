//! Meeting-time model and parser.
//!
//! Converts a section's free-form meeting-time text (e.g.
//! `"MWF 09:00-10:00; TTH 13:00-14:30"`) into normalized weekly
//! intervals used for conflict checking and calendar export.
//!
//! # Day Codes
//!
//! One canonical day-code table is used everywhere:
//!
//! | Code | Day | Number |
//! |------|-----|--------|
//! | `M` | Monday | 1 |
//! | `T` | Tuesday | 2 |
//! | `W` | Wednesday | 3 |
//! | `TH` | Thursday | 4 |
//! | `F` | Friday | 5 |
//! | `SAT` / `S` | Saturday | 6 |
//!
//! Codes are matched greedily, longest first (3-letter, then 2-letter,
//! then 1-letter), so `TH` is Thursday rather than Tuesday followed by
//! an unknown `H`. Sunday is not representable; classes are never
//! scheduled on Sunday.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A weekday on which classes can meet (Monday through Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    /// Monday (1).
    Monday,
    /// Tuesday (2).
    Tuesday,
    /// Wednesday (3).
    Wednesday,
    /// Thursday (4).
    Thursday,
    /// Friday (5).
    Friday,
    /// Saturday (6).
    Saturday,
}

impl Day {
    /// Day number, Monday = 1 through Saturday = 6.
    pub fn number(&self) -> u8 {
        match self {
            Day::Monday => 1,
            Day::Tuesday => 2,
            Day::Wednesday => 3,
            Day::Thursday => 4,
            Day::Friday => 5,
            Day::Saturday => 6,
        }
    }

    /// Two-letter iCalendar BYDAY code (`MO`, `TU`, ...).
    pub fn ics_code(&self) -> &'static str {
        match self {
            Day::Monday => "MO",
            Day::Tuesday => "TU",
            Day::Wednesday => "WE",
            Day::Thursday => "TH",
            Day::Friday => "FR",
            Day::Saturday => "SA",
        }
    }
}

/// One meeting occurrence per week: a day plus a start/end time.
///
/// Times are minutes from midnight. Intervals are half-open for
/// conflict purposes: back-to-back meetings do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Day of the week.
    pub day: Day,
    /// Start time in minutes from midnight.
    pub start_minutes: u16,
    /// End time in minutes from midnight.
    pub end_minutes: u16,
}

impl TimeInterval {
    /// Creates an interval.
    pub fn new(day: Day, start_minutes: u16, end_minutes: u16) -> Self {
        Self {
            day,
            start_minutes,
            end_minutes,
        }
    }

    /// Whether two intervals overlap.
    ///
    /// Overlap requires the same day and `start1 < end2 && end1 > start2`.
    /// A meeting ending exactly when another starts does not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.day == other.day
            && self.start_minutes < other.end_minutes
            && self.end_minutes > other.start_minutes
    }
}

/// One `;`-separated clause of a meeting-time string: a set of days
/// sharing a single time range (e.g. `MWF 09:00-10:00`).
///
/// Preserved as a unit (rather than flattened intervals) so the
/// calendar exporter can emit one recurring event per clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingClause {
    /// Days this clause meets on, in the order they appear in the text.
    pub days: Vec<Day>,
    /// Start time in minutes from midnight.
    pub start_minutes: u16,
    /// End time in minutes from midnight.
    pub end_minutes: u16,
}

impl MeetingClause {
    /// Expands the clause into one interval per day.
    pub fn intervals(&self) -> impl Iterator<Item = TimeInterval> + '_ {
        self.days
            .iter()
            .map(|&day| TimeInterval::new(day, self.start_minutes, self.end_minutes))
    }
}

// Matches "9:00-10:30", "09:00 - 10:30", and the colonless "0900-1030".
// Hours are 1-2 digits, minutes always 2.
static TIME_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}):?(\d{2})\s*-\s*(\d{1,2}):?(\d{2})").unwrap());

/// Parses meeting-time text into clauses.
///
/// Returns an empty list for empty text or anything containing `TBA`
/// (case-insensitive) — such sections never conflict. Clauses with no
/// recognizable time range or day codes are skipped, not errors.
pub fn parse_meeting_clauses(text: &str) -> Vec<MeetingClause> {
    if text.trim().is_empty() || text.to_lowercase().contains("tba") {
        return Vec::new();
    }

    let mut clauses = Vec::new();
    for part in text.split(';') {
        let part = part.trim();
        let Some(range) = TIME_RANGE.captures(part) else {
            continue;
        };

        // Captures 1-4 are all digits by construction.
        let start = parse_minutes(&range[1], &range[2]);
        let end = parse_minutes(&range[3], &range[4]);

        let range_start = range.get(0).map(|m| m.start()).unwrap_or(0);
        let days = tokenize_days(&part[..range_start]);
        if days.is_empty() {
            continue;
        }

        clauses.push(MeetingClause {
            days,
            start_minutes: start,
            end_minutes: end,
        });
    }
    clauses
}

/// Parses meeting-time text into a flat list of weekly intervals.
///
/// A clause naming three days yields three intervals sharing one time
/// range. Output order follows the text; duplicates are not collapsed.
pub fn parse_meeting_times(text: &str) -> Vec<TimeInterval> {
    parse_meeting_clauses(text)
        .iter()
        .flat_map(|clause| clause.intervals().collect::<Vec<_>>())
        .collect()
}

fn parse_minutes(hours: &str, minutes: &str) -> u16 {
    let h: u16 = hours.parse().unwrap_or(0);
    let m: u16 = minutes.parse().unwrap_or(0);
    h * 60 + m
}

/// Greedy longest-match day tokenizer.
///
/// Tries a 3-letter code (`SAT`), then 2-letter (`TH`), then 1-letter
/// at each position. Separators (spaces, hyphens, pipes) and anything
/// unrecognized are skipped.
fn tokenize_days(segment: &str) -> Vec<Day> {
    let upper = segment.to_uppercase();
    let bytes = upper.as_bytes();
    let mut days = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i..].starts_with(b"SAT") {
            days.push(Day::Saturday);
            i += 3;
        } else if bytes[i..].starts_with(b"TH") {
            days.push(Day::Thursday);
            i += 2;
        } else {
            match bytes[i] {
                b'M' => days.push(Day::Monday),
                b'T' => days.push(Day::Tuesday),
                b'W' => days.push(Day::Wednesday),
                b'F' => days.push(Day::Friday),
                b'S' => days.push(Day::Saturday),
                _ => {}
            }
            i += 1;
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(day: Day, start: u16, end: u16) -> TimeInterval {
        TimeInterval::new(day, start, end)
    }

    #[test]
    fn test_overlap_rule() {
        let a = interval(Day::Monday, 540, 600); // 9:00-10:00
        let b = interval(Day::Monday, 570, 630); // 9:30-10:30
        assert!(a.overlaps(&b));

        // Different day → no overlap
        let c = interval(Day::Tuesday, 540, 600);
        assert!(!a.overlaps(&c));

        // Back-to-back → no overlap
        let d = interval(Day::Monday, 600, 660);
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_overlap_symmetry() {
        let cases = [
            (interval(Day::Monday, 540, 600), interval(Day::Monday, 570, 630)),
            (interval(Day::Monday, 540, 600), interval(Day::Monday, 600, 660)),
            (interval(Day::Friday, 480, 540), interval(Day::Friday, 480, 540)),
            (interval(Day::Monday, 540, 600), interval(Day::Tuesday, 540, 600)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_parse_simple_clause() {
        let times = parse_meeting_times("MWF 09:00-10:00");
        assert_eq!(
            times,
            vec![
                interval(Day::Monday, 540, 600),
                interval(Day::Wednesday, 540, 600),
                interval(Day::Friday, 540, 600),
            ]
        );
    }

    #[test]
    fn test_parse_tth_is_tuesday_thursday() {
        let times = parse_meeting_times("TTH 13:00-14:30");
        assert_eq!(
            times,
            vec![
                interval(Day::Tuesday, 780, 870),
                interval(Day::Thursday, 780, 870),
            ]
        );
    }

    #[test]
    fn test_parse_th_alone_is_thursday() {
        let times = parse_meeting_times("TH 08:00-09:00");
        assert_eq!(times, vec![interval(Day::Thursday, 480, 540)]);
    }

    #[test]
    fn test_parse_sat_and_s() {
        assert_eq!(
            parse_meeting_times("SAT 10:00-12:00"),
            vec![interval(Day::Saturday, 600, 720)]
        );
        assert_eq!(
            parse_meeting_times("S 10:00-12:00"),
            vec![interval(Day::Saturday, 600, 720)]
        );
    }

    #[test]
    fn test_parse_multiple_clauses() {
        let clauses = parse_meeting_clauses("MW 09:00-10:00; F 13:00-16:00");
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].days, vec![Day::Monday, Day::Wednesday]);
        assert_eq!(clauses[1].days, vec![Day::Friday]);
        assert_eq!(clauses[1].start_minutes, 780);
        assert_eq!(clauses[1].end_minutes, 960);
    }

    #[test]
    fn test_parse_separators_skipped() {
        let times = parse_meeting_times("M-W-F 09:00-10:00");
        assert_eq!(times.len(), 3);
        let times = parse_meeting_times("T | TH 09:00-10:00");
        assert_eq!(
            times,
            vec![
                interval(Day::Tuesday, 540, 600),
                interval(Day::Thursday, 540, 600),
            ]
        );
    }

    #[test]
    fn test_parse_colonless_times() {
        let times = parse_meeting_times("MW 0900-1030");
        assert_eq!(
            times,
            vec![
                interval(Day::Monday, 540, 630),
                interval(Day::Wednesday, 540, 630),
            ]
        );
    }

    #[test]
    fn test_tba_and_empty_yield_nothing() {
        assert!(parse_meeting_times("").is_empty());
        assert!(parse_meeting_times("TBA").is_empty());
        assert!(parse_meeting_times("tba").is_empty());
        assert!(parse_meeting_times("MWF TBA").is_empty());
    }

    #[test]
    fn test_unparseable_clause_skipped() {
        // First clause has no time range, second is fine.
        let times = parse_meeting_times("MWF; T 09:00-10:00");
        assert_eq!(times, vec![interval(Day::Tuesday, 540, 600)]);

        // No day codes at all → nothing.
        assert!(parse_meeting_times("09:00-10:00").is_empty());
        assert!(parse_meeting_times("room 301").is_empty());
    }

    #[test]
    fn test_day_numbers() {
        assert_eq!(Day::Monday.number(), 1);
        assert_eq!(Day::Thursday.number(), 4);
        assert_eq!(Day::Saturday.number(), 6);
    }

    #[test]
    fn test_ics_codes() {
        assert_eq!(Day::Monday.ics_code(), "MO");
        assert_eq!(Day::Thursday.ics_code(), "TH");
        assert_eq!(Day::Saturday.ics_code(), "SA");
    }
}
