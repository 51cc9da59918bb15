//! Console rendering of tasks and weekly reports.

use crate::libs::report::{self, WeekSummary};
use crate::libs::task::Task;
use crate::libs::week::WeekReport;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "EMPLOYER", "PUNCH IN", "PUNCH OUT", "HOURS", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.employer,
                task.punch_in.as_deref().unwrap_or("-"),
                task.punch_out.as_deref().unwrap_or("-"),
                format!("{:.2}", task.hours_spent),
                if task.completed { "Complete" } else { "Pending" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints the weekly summary metrics, the Monday-to-Sunday breakdown
    /// table, and the insight list.
    pub fn week(week_report: &WeekReport, target_hours: f64) -> Result<()> {
        let summary = report::summarize(week_report, target_hours);
        Self::week_summary(&summary, week_report.average_hours, target_hours);

        let mut table = Table::new();
        table.add_row(row!["DAY", "DATE", "HOURS", "TASKS"]);
        for day in &week_report.days {
            table.add_row(row![
                day.date.format("%a"),
                day.date.format("%Y-%m-%d"),
                format!("{:.1}", day.hours),
                format!("{}/{}", day.completed, day.tasks)
            ]);
        }
        table.printstd();

        let insight_list = report::insights(week_report, target_hours);
        if !insight_list.is_empty() {
            println!();
            for insight in &insight_list {
                println!("{} {}", insight.title, insight.detail);
            }
        }

        Ok(())
    }

    fn week_summary(summary: &WeekSummary, average_hours: f64, target_hours: f64) {
        println!("Total hours:      {:.1}", summary.total_hours);
        println!("Completed tasks:  {}", summary.completed_tasks);
        println!("Completion rate:  {:.0}%", summary.completion_percent);
        println!(
            "Daily average:    {:.1}h of {}h target ({})",
            average_hours,
            target_hours,
            if summary.met_target { "met" } else { "not met" }
        );
        println!();
    }
}
