//! Weekly aggregation over logged entries.
//!
//! Given a reference date and the full entry collection, derives the
//! Monday-to-Sunday week window containing the date and rolls entries up
//! into per-day and whole-week statistics. The aggregation is a pure
//! function of its inputs: no I/O, no hidden state, deterministic.
//!
//! Dates are compared at day granularity in the user's local calendar.
//! Stored date text is normalized to a calendar day before any comparison;
//! entries whose dates do not parse are excluded from the rollup and
//! counted, never escalated to a failure.

use crate::libs::task::{Task, DATE_FORMAT};
use crate::msg_debug;
use chrono::{Datelike, Duration, NaiveDate};

/// The 7-day Monday-to-Sunday span containing a reference date,
/// inclusive on both ends. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Resolves the week containing `reference`. Weeks start on Monday:
    /// a Sunday reference resolves to the Monday six days earlier.
    pub fn containing(reference: NaiveDate) -> Self {
        let start = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
        WeekWindow {
            start,
            end: start + Duration::days(6),
        }
    }

    /// The seven days of the window in Monday-to-Sunday order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let start = self.start;
        (0..7).map(move |offset| start + Duration::days(offset))
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Human-readable range, e.g. "Jan 1 - Jan 7, 2024".
    pub fn label(&self) -> String {
        format!("{} - {}, {}", self.start.format("%b %-d"), self.end.format("%b %-d"), self.end.format("%Y"))
    }
}

/// Per-day rollup within a week window. Derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStat {
    pub date: NaiveDate,
    /// Sum of `hours_spent` over entries on this day.
    pub hours: f64,
    /// Sum of `hours_spent` over completed entries on this day.
    pub completed_hours: f64,
    pub tasks: usize,
    pub completed: usize,
}

/// Whole-week aggregate: the window, seven ordered day stats, and
/// week-level totals.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekReport {
    pub week: WeekWindow,
    /// Exactly seven entries, Monday through Sunday.
    pub days: Vec<DayStat>,
    pub total_hours: f64,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// `completed_tasks / total_tasks` as a fraction; 0.0 for an empty week.
    pub completion_rate: f64,
    /// `total_hours / 7`, always dividing by the full week regardless of
    /// how many days have entries.
    pub average_hours: f64,
    /// Entries excluded because their stored date did not parse.
    pub skipped_entries: usize,
}

/// Normalizes stored date text to a calendar day.
///
/// Accepts the plain ISO day format and tolerates a trailing time component
/// by truncating at `T`. Anything else is a data-quality problem and
/// yields `None`.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim();
    let day = day.split('T').next().unwrap_or(day);
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}

/// Aggregates the week containing `reference` over the full entry
/// collection.
///
/// Idempotent over a snapshot of its inputs; callers mutating the entry
/// collection concurrently must aggregate over an immutable copy.
pub fn aggregate(reference: NaiveDate, tasks: &[Task]) -> WeekReport {
    let week = WeekWindow::containing(reference);

    let mut skipped_entries = 0;
    let mut dated: Vec<(NaiveDate, &Task)> = Vec::with_capacity(tasks.len());
    for task in tasks {
        match parse_entry_date(&task.date) {
            Some(day) => {
                if week.contains(day) {
                    dated.push((day, task));
                }
            }
            None => {
                msg_debug!(format!("Excluding entry {} with unreadable date '{}'", task.id, task.date));
                skipped_entries += 1;
            }
        }
    }

    let days: Vec<DayStat> = week
        .days()
        .map(|date| {
            let mut stat = DayStat {
                date,
                hours: 0.0,
                completed_hours: 0.0,
                tasks: 0,
                completed: 0,
            };
            for (day, task) in &dated {
                if *day == date {
                    stat.hours += task.hours_spent;
                    stat.tasks += 1;
                    if task.completed {
                        stat.completed += 1;
                        stat.completed_hours += task.hours_spent;
                    }
                }
            }
            stat
        })
        .collect();

    let total_hours: f64 = days.iter().map(|d| d.hours).sum();
    let total_tasks: usize = days.iter().map(|d| d.tasks).sum();
    let completed_tasks: usize = days.iter().map(|d| d.completed).sum();
    let completion_rate = if total_tasks > 0 {
        completed_tasks as f64 / total_tasks as f64
    } else {
        0.0
    };

    WeekReport {
        week,
        days,
        total_hours,
        total_tasks,
        completed_tasks,
        completion_rate,
        average_hours: total_hours / 7.0,
        skipped_entries,
    }
}
