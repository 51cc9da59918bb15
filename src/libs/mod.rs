//! Core library modules for the shiftlog application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Punch Clock**: 12-hour time parsing and elapsed-hours calculation
//! - **Weekly Aggregation**: Monday-to-Sunday rollups over logged entries
//! - **User Interface**: Console rendering, report formatting, data export

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod report;
pub mod task;
pub mod view;
pub mod week;
