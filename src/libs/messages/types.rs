#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),          // title
    TaskUpdated(String),          // title
    TaskDeleted(String),          // id
    TaskNotFound(String),         // id
    TasksNotFoundForDate(String), // date
    TaskTitleRequired,
    InvalidHoursValue(f64),
    TaskCompletionSet(String, bool),   // title, completed
    CompletedHoursForDay(String, f64), // date, hours

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigWizardHeader,
    PromptTargetHours,

    // === REPORT MESSAGES ===
    ReportHeader(String),          // week range
    MalformedDatesExcluded(usize), // entry count
    NoEntriesForWeek(String),      // week range

    // === EXPORT MESSAGES ===
    ExportCompleted(String),   // path
    NothingToExport(String),   // date

    // === ERROR MESSAGES ===
    ConfigParseError,
    ConfigSaveError,
    DbConnectionFailed(String),
    MigrationFailed(String),
    MigrationApplied(u32, String), // version, name
}
