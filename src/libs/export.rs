//! Data export for weekly reports and task records.
//!
//! The exporter is the "render to file" collaborator of the weekly report:
//! it accepts a self-contained document and a filename hint and writes it to
//! disk. Markdown carries the rendered report verbatim; CSV and JSON carry
//! the underlying data for external analysis.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::libs::export::{Exporter, ExportData, ExportFormat};
//! use chrono::NaiveDate;
//!
//! let exporter = Exporter::new(ExportFormat::Markdown, None);
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! exporter.export(ExportData::Report, date, 8.0)?;
//! # anyhow::Ok(())
//! ```

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::week::{self, WeekReport};
use crate::libs::report;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Self-contained Markdown document, the shareable report rendering.
    Markdown,
    /// Comma-separated values for spreadsheets and analysis tools.
    Csv,
    /// Pretty-printed JSON preserving the full data structure.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Data types available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// The weekly report for the week containing the given date.
    Report,
    /// The task records logged on the given date.
    Tasks,
}

/// Serializable weekly report for CSV/JSON export. Dates are carried as
/// plain text for format compatibility.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportReport {
    pub week_start: String,
    pub week_end: String,
    pub days: Vec<ExportDayStat>,
    pub total_hours: f64,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub completion_rate: f64,
    pub average_hours: f64,
    pub target_hours: f64,
    pub met_target: bool,
}

/// One day row within an exported weekly report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDayStat {
    pub date: String,
    pub weekday: String,
    pub hours: f64,
    pub tasks: usize,
    pub completed: usize,
}

/// Serializable task record for export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub employer: String,
    pub punch_in: String,
    pub punch_out: String,
    pub hours_spent: f64,
    pub date: String,
    pub completed: bool,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            employer: task.employer.clone(),
            punch_in: task.punch_in.clone().unwrap_or_default(),
            punch_out: task.punch_out.clone().unwrap_or_default(),
            hours_spent: task.hours_spent,
            date: task.date.clone(),
            completed: task.completed,
        }
    }
}

/// Export handler: holds the format and optional custom output path and
/// dispatches to the per-format writers.
pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    /// Exports the requested data set, returning the written path.
    pub fn export(&self, data_type: ExportData, date: NaiveDate, target_hours: f64) -> Result<PathBuf> {
        let path = match data_type {
            ExportData::Report => self.export_report(date, target_hours)?,
            ExportData::Tasks => self.export_tasks(date)?,
        };
        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(path)
    }

    /// Resolves the output path: a custom path wins, otherwise the filename
    /// hint plus the format extension.
    fn resolve_path(&self, stem: &str) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.{}", stem, self.format.extension())))
    }

    fn export_report(&self, date: NaiveDate, target_hours: f64) -> Result<PathBuf> {
        let tasks = Tasks::new()?.get_all()?;
        let week_report = week::aggregate(date, &tasks);
        let path = self.resolve_path(&report::suggested_file_stem(&week_report.week));

        match self.format {
            ExportFormat::Markdown => {
                let doc = report::render_markdown(&week_report, target_hours);
                File::create(&path)?.write_all(doc.as_bytes())?;
            }
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path)?;
                for day in Self::day_rows(&week_report) {
                    writer.serialize(day)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let summary = report::summarize(&week_report, target_hours);
                let doc = ExportReport {
                    week_start: week_report.week.start.to_string(),
                    week_end: week_report.week.end.to_string(),
                    days: Self::day_rows(&week_report),
                    total_hours: week_report.total_hours,
                    total_tasks: week_report.total_tasks,
                    completed_tasks: week_report.completed_tasks,
                    completion_rate: week_report.completion_rate,
                    average_hours: week_report.average_hours,
                    target_hours,
                    met_target: summary.met_target,
                };
                let json = serde_json::to_string_pretty(&doc)?;
                File::create(&path)?.write_all(json.as_bytes())?;
            }
        }

        Ok(path)
    }

    fn export_tasks(&self, date: NaiveDate) -> Result<PathBuf> {
        let tasks = Tasks::new()?.get_by_date(date)?;
        if tasks.is_empty() {
            msg_bail_anyhow!(Message::NothingToExport(date.to_string()));
        }

        let export_tasks: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();
        let path = self.resolve_path(&format!("shiftlog_tasks_{}", date.format("%Y%m%d")));

        match self.format {
            ExportFormat::Markdown => {
                let mut doc = format!("# Tasks for {}\n\n", date);
                doc.push_str("| Title | Employer | Punch In | Punch Out | Hours | Status |\n");
                doc.push_str("|-------|----------|----------|-----------|-------|--------|\n");
                for task in &export_tasks {
                    doc.push_str(&format!(
                        "| {} | {} | {} | {} | {:.2} | {} |\n",
                        task.title,
                        task.employer,
                        task.punch_in,
                        task.punch_out,
                        task.hours_spent,
                        if task.completed { "Complete" } else { "Pending" }
                    ));
                }
                File::create(&path)?.write_all(doc.as_bytes())?;
            }
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path)?;
                for task in &export_tasks {
                    writer.serialize(task)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&export_tasks)?;
                File::create(&path)?.write_all(json.as_bytes())?;
            }
        }

        Ok(path)
    }

    fn day_rows(week_report: &WeekReport) -> Vec<ExportDayStat> {
        week_report
            .days
            .iter()
            .map(|day| ExportDayStat {
                date: day.date.to_string(),
                weekday: day.date.format("%a").to_string(),
                hours: day.hours,
                tasks: day.tasks,
                completed: day.completed,
            })
            .collect()
    }
}
