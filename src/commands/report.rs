//! Weekly report preparation and display.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::libs::week;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(short, long, help = "Any date within the week to report (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,

    #[arg(short, long, help = "Daily target hours, overrides the configured value")]
    target: Option<f64>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let target_hours = args.target.unwrap_or_else(|| config.target_hours());
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let tasks = Tasks::new()?.get_all()?;
    let week_report = week::aggregate(date, &tasks);

    if week_report.skipped_entries > 0 {
        msg_warning!(Message::MalformedDatesExcluded(week_report.skipped_entries));
    }

    msg_print!(Message::ReportHeader(week_report.week.label()), true);
    View::week(&week_report, target_hours)?;

    if week_report.total_tasks == 0 {
        msg_print!(Message::NoEntriesForWeek(week_report.week.label()));
    }

    Ok(())
}
