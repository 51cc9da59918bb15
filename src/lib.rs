//! # Shiftlog - Punch-Clock Timesheet
//!
//! A command-line timesheet for logging per-day work entries and
//! generating weekly productivity reports.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, and track work entries per calendar day
//! - **Punch Clock**: 12-hour punch-in/punch-out times with automatic hours calculation
//! - **Weekly Reports**: Monday-to-Sunday rollups with totals, averages, and insights
//! - **Data Export**: Export reports and tasks to Markdown, CSV, and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
