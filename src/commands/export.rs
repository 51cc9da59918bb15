//! Export of weekly reports and task records to files.

use crate::libs::config::Config;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "report", help = "Data set to export")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "markdown", help = "Output format")]
    format: ExportFormat,

    #[arg(short, long, help = "Output file path, defaults to a generated name")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Reference date (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(args.data, date, config.target_hours())?;

    Ok(())
}
