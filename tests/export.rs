#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftlog::db::tasks::Tasks;
    use shiftlog::libs::export::{ExportData, ExportFormat, ExportReport, ExportTask, Exporter};
    use shiftlog::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { temp_dir }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seed_week(tasks: &mut Tasks) {
        let mut first = Task::new("Write docs", "", "Acme", date(2024, 1, 2));
        first.id = "t1".to_string();
        first.punch_in = Some("9:00 AM".to_string());
        first.punch_out = Some("5:00 PM".to_string());
        first.sync_hours();
        first.completed = true;
        tasks.insert(&first).unwrap();

        let mut second = Task::new("Review PRs", "", "Acme", date(2024, 1, 4));
        second.id = "t2".to_string();
        second.hours_spent = 3.0;
        tasks.insert(&second).unwrap();
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_report_markdown(ctx: &mut ExportTestContext) {
        seed_week(&mut Tasks::new().unwrap());

        let output = ctx.temp_dir.path().join("report.md");
        let exporter = Exporter::new(ExportFormat::Markdown, Some(output.clone()));
        let written = exporter.export(ExportData::Report, date(2024, 1, 3), 8.0).unwrap();
        assert_eq!(written, output);

        let doc = std::fs::read_to_string(&output).unwrap();
        assert!(doc.contains("# Weekly Report"));
        assert!(doc.contains("Jan 1 - Jan 7, 2024"));
        assert!(doc.contains("- Total hours: 11.0"));
        assert!(doc.contains("- Completed tasks: 1"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_report_json(ctx: &mut ExportTestContext) {
        seed_week(&mut Tasks::new().unwrap());

        let output = ctx.temp_dir.path().join("report.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output.clone()));
        exporter.export(ExportData::Report, date(2024, 1, 3), 8.0).unwrap();

        let json = std::fs::read_to_string(&output).unwrap();
        let report: ExportReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.week_start, "2024-01-01");
        assert_eq!(report.week_end, "2024-01-07");
        assert_eq!(report.days.len(), 7);
        assert!((report.total_hours - 11.0).abs() < 1e-9);
        assert_eq!(report.total_tasks, 2);
        assert_eq!(report.completed_tasks, 1);
        assert!(!report.met_target);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_report_csv_has_seven_day_rows(ctx: &mut ExportTestContext) {
        seed_week(&mut Tasks::new().unwrap());

        let output = ctx.temp_dir.path().join("report.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output.clone()));
        exporter.export(ExportData::Report, date(2024, 1, 3), 8.0).unwrap();

        let csv = std::fs::read_to_string(&output).unwrap();
        // Header plus one row per day of the week
        assert_eq!(csv.lines().count(), 8);
        assert!(csv.lines().next().unwrap().contains("date"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_tasks_json(ctx: &mut ExportTestContext) {
        seed_week(&mut Tasks::new().unwrap());

        let output = ctx.temp_dir.path().join("tasks.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output.clone()));
        exporter.export(ExportData::Tasks, date(2024, 1, 2), 8.0).unwrap();

        let json = std::fs::read_to_string(&output).unwrap();
        let tasks: Vec<ExportTask> = serde_json::from_str(&json).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "t1");
        assert_eq!(tasks[0].punch_in, "9:00 AM");
        assert!((tasks[0].hours_spent - 8.0).abs() < 1e-9);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_tasks_empty_day_fails(ctx: &mut ExportTestContext) {
        // Database exists but the day has no entries
        let _ = Tasks::new().unwrap();

        let output = ctx.temp_dir.path().join("tasks.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output.clone()));
        let result = exporter.export(ExportData::Tasks, date(2024, 1, 2), 8.0);
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
