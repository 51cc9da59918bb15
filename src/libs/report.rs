//! Weekly report rendering.
//!
//! Turns a [`WeekReport`] aggregate and a caller-supplied daily target into
//! display-ready content: summary metrics, threshold-driven insights, and a
//! self-contained Markdown document with a suggested filename. No I/O
//! happens here; writing the document to disk is the exporter's job.

use crate::libs::week::{WeekReport, WeekWindow};

/// Week-level summary metrics for display.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub total_hours: f64,
    pub completed_tasks: usize,
    /// Completion rate rounded to the nearest whole percent.
    pub completion_percent: f64,
    /// Whether the daily average met the target; the boundary counts as met.
    pub met_target: bool,
}

/// One qualitative insight derived from the week's numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub title: String,
    pub detail: String,
}

pub fn summarize(report: &WeekReport, target_hours: f64) -> WeekSummary {
    WeekSummary {
        total_hours: report.total_hours,
        completed_tasks: report.completed_tasks,
        completion_percent: (report.completion_rate * 100.0).round(),
        met_target: report.average_hours >= target_hours,
    }
}

/// Derives the insight list from simple thresholds.
///
/// The three conditions are independent: any subset of them may fire. The
/// completion insight includes the 80% boundary.
pub fn insights(report: &WeekReport, target_hours: f64) -> Vec<Insight> {
    let mut out = Vec::new();
    let completion_percent = report.completion_rate * 100.0;

    if report.average_hours >= target_hours {
        out.push(Insight {
            title: "Great productivity!".to_string(),
            detail: "You're meeting your daily hour targets this week.".to_string(),
        });
    }

    if completion_percent >= 80.0 {
        out.push(Insight {
            title: "Excellent completion rate!".to_string(),
            detail: format!("You completed {:.0}% of your planned tasks.", completion_percent),
        });
    }

    if report.average_hours < target_hours {
        out.push(Insight {
            title: "Room for improvement".to_string(),
            detail: format!("Try to increase your daily hours to reach your {}h target.", target_hours),
        });
    }

    out
}

/// Suggested file stem for the rendered document, derived from the week's
/// start and end month-day values, e.g. `weekly_report_Jan01-Jan07`.
/// The exporter appends the format-appropriate extension.
pub fn suggested_file_stem(week: &WeekWindow) -> String {
    format!("weekly_report_{}-{}", week.start.format("%b%d"), week.end.format("%b%d"))
}

/// Renders the full weekly report as a self-contained Markdown document.
pub fn render_markdown(report: &WeekReport, target_hours: f64) -> String {
    let summary = summarize(report, target_hours);
    let mut doc = String::new();

    doc.push_str("# Weekly Report\n\n");
    doc.push_str(&format!("{}\n\n", report.week.label()));

    doc.push_str("## Summary\n\n");
    doc.push_str(&format!("- Total hours: {:.1}\n", summary.total_hours));
    doc.push_str(&format!("- Completed tasks: {}\n", summary.completed_tasks));
    doc.push_str(&format!("- Completion rate: {:.0}%\n", summary.completion_percent));
    doc.push_str(&format!(
        "- Daily average: {:.1}h of {}h target ({})\n\n",
        report.average_hours,
        target_hours,
        if summary.met_target { "met" } else { "not met" }
    ));

    doc.push_str("## Daily Breakdown\n\n");
    doc.push_str("| Day | Date | Hours | Tasks |\n");
    doc.push_str("|-----|------|-------|-------|\n");
    for day in &report.days {
        doc.push_str(&format!(
            "| {} | {} | {:.1} | {}/{} |\n",
            day.date.format("%a"),
            day.date.format("%Y-%m-%d"),
            day.hours,
            day.completed,
            day.tasks
        ));
    }
    doc.push('\n');

    let insight_list = insights(report, target_hours);
    if !insight_list.is_empty() {
        doc.push_str("## Insights\n\n");
        for insight in &insight_list {
            doc.push_str(&format!("- **{}** {}\n", insight.title, insight.detail));
        }
        doc.push('\n');
    }

    doc
}
