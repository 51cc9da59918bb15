//! Display implementation for shiftlog application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! on the terminal. All user-facing message text lives here, in one place,
//! so wording stays consistent across commands.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TasksNotFoundForDate(date) => format!("No tasks found for {}", date),
            Message::TaskTitleRequired => "Please enter a task title".to_string(),
            Message::InvalidHoursValue(hours) => format!("Hours must be a non-negative number, got {}", hours),
            Message::TaskCompletionSet(title, completed) => {
                let state = if *completed { "complete" } else { "pending" };
                format!("Task '{}' marked {}", title, state)
            }
            Message::CompletedHoursForDay(date, hours) => format!("Completed hours for {}: {:.2}", date, hours),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigWizardHeader => "Shiftlog configuration".to_string(),
            Message::PromptTargetHours => "Daily target hours".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(range) => format!("📊 Weekly Report: {}", range),
            Message::MalformedDatesExcluded(count) => {
                format!("{} entries with unreadable dates were excluded from the report", count)
            }
            Message::NoEntriesForWeek(range) => format!("No entries logged for {}", range),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Exported to: {}", path),
            Message::NothingToExport(date) => format!("Nothing to export for {}", date),

            // === ERROR MESSAGES ===
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::DbConnectionFailed(err) => format!("Failed to open database: {}", err),
            Message::MigrationFailed(err) => format!("Database migration failed: {}", err),
            Message::MigrationApplied(version, name) => format!("Applied migration v{}: {}", version, name),
        };
        write!(f, "{}", text)
    }
}
