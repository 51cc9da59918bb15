#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftlog::db::tasks::Tasks;
    use shiftlog::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_task(id: &str, day: NaiveDate) -> Task {
        let mut task = Task::new("Write docs", "Quarterly summary", "Acme", day);
        task.id = id.to_string();
        task
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_and_get_by_date(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&sample_task("t1", date(2024, 1, 2))).unwrap();
        tasks.insert(&sample_task("t2", date(2024, 1, 3))).unwrap();

        let day = tasks.get_by_date(date(2024, 1, 2)).unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].id, "t1");
        assert_eq!(day[0].title, "Write docs");
        assert_eq!(day[0].employer, "Acme");
        assert!(!day[0].completed);

        let all = tasks.get_all().unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_punch_times_round_trip(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mut task = sample_task("t1", date(2024, 1, 2));
        task.punch_in = Some("9:00 AM".to_string());
        task.punch_out = Some("5:30 PM".to_string());
        task.sync_hours();
        tasks.insert(&task).unwrap();

        let stored = tasks.get_by_id("t1").unwrap().unwrap();
        assert_eq!(stored.punch_in.as_deref(), Some("9:00 AM"));
        assert_eq!(stored.punch_out.as_deref(), Some("5:30 PM"));
        assert!((stored.hours_spent - 8.5).abs() < 1e-9);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_missing_punches_read_back_as_none(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&sample_task("t1", date(2024, 1, 2))).unwrap();

        let stored = tasks.get_by_id("t1").unwrap().unwrap();
        assert_eq!(stored.punch_in, None);
        assert_eq!(stored.punch_out, None);
        assert_eq!(stored.hours_spent, 0.0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&sample_task("t1", date(2024, 1, 2))).unwrap();

        let mut task = tasks.get_by_id("t1").unwrap().unwrap();
        task.title = "Review docs".to_string();
        task.hours_spent = 2.5;
        task.completed = true;
        let updated = tasks.update(&task).unwrap();
        assert_eq!(updated, 1);

        let stored = tasks.get_by_id("t1").unwrap().unwrap();
        assert_eq!(stored.title, "Review docs");
        assert!((stored.hours_spent - 2.5).abs() < 1e-9);
        assert!(stored.completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&sample_task("t1", date(2024, 1, 2))).unwrap();
        assert_eq!(tasks.delete("t1").unwrap(), 1);
        assert_eq!(tasks.delete("t1").unwrap(), 0);
        assert!(tasks.get_by_id("t1").unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_completed_toggle(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&sample_task("t1", date(2024, 1, 2))).unwrap();

        tasks.set_completed("t1", true).unwrap();
        assert!(tasks.get_by_id("t1").unwrap().unwrap().completed);

        tasks.set_completed("t1", false).unwrap();
        assert!(!tasks.get_by_id("t1").unwrap().unwrap().completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_id_missing(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert!(tasks.get_by_id("no-such-id").unwrap().is_none());
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        use shiftlog::libs::task::validate_hours;

        assert!(validate_hours(-5.0).is_err());
        assert!(validate_hours(-0.25).is_err());
        assert!(validate_hours(f64::NAN).is_err());
        assert!(validate_hours(f64::INFINITY).is_err());

        assert!(validate_hours(0.0).is_ok());
        assert!(validate_hours(8.5).is_ok());
    }
}
