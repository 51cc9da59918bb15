//! Work-log entry model.
//!
//! A [`Task`] is one work-log record tied to a calendar day. The stored
//! `hours_spent` value is kept synchronized with the punch times: whenever
//! both punch-in and punch-out are set, [`Task::sync_hours`] recomputes the
//! hours from them, and an incomplete or unreadable pair leaves the field
//! untouched.

use crate::libs::clock;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Storage format for entry dates, day granularity.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation and never reassigned.
    pub id: String,
    pub title: String,
    pub description: String,
    pub employer: String,
    /// Punch-in time in 12-hour clock format, e.g. "9:00 AM".
    pub punch_in: Option<String>,
    /// Punch-out time in 12-hour clock format, e.g. "5:30 PM".
    pub punch_out: Option<String>,
    /// Non-negative fractional hours; derived from the punch times when both
    /// are present, otherwise supplied directly or left at zero.
    pub hours_spent: f64,
    /// ISO calendar date (day granularity) the entry belongs to. Kept as the
    /// stored text; aggregation normalizes it before any comparison.
    pub date: String,
    pub completed: bool,
}

impl Task {
    pub fn new(title: &str, description: &str, employer: &str, date: NaiveDate) -> Self {
        Task {
            id: Local::now().timestamp_millis().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            employer: employer.to_string(),
            punch_in: None,
            punch_out: None,
            hours_spent: 0.0,
            date: date.format(DATE_FORMAT).to_string(),
            completed: false,
        }
    }

    /// Recomputes `hours_spent` from the punch times.
    ///
    /// No-op when either punch time is missing or unreadable, so a manually
    /// supplied hours value survives until a full punch pair exists.
    pub fn sync_hours(&mut self) {
        let (Some(punch_in), Some(punch_out)) = (&self.punch_in, &self.punch_out) else {
            return;
        };
        if let Ok(hours) = clock::hours_between(punch_in, punch_out) {
            self.hours_spent = hours;
        }
    }
}

/// Validates a caller-supplied hours value before it reaches an entry.
///
/// `hours_spent` is non-negative by contract; a negative or non-finite
/// value would silently skew weekly totals and averages.
pub fn validate_hours(hours: f64) -> Result<()> {
    if !hours.is_finite() || hours < 0.0 {
        msg_bail_anyhow!(Message::InvalidHoursValue(hours));
    }
    Ok(())
}

/// Sums the hours of completed entries, the per-day completed-hours rollup
/// shown in the day view.
pub fn completed_hours(tasks: &[Task]) -> f64 {
    tasks.iter().filter(|t| t.completed).map(|t| t.hours_spent).sum()
}
