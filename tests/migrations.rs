#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use shiftlog::db::db::DB_FILE_NAME;
    use shiftlog::db::migrations::{get_db_version, init_with_migrations};
    use shiftlog::db::tasks::Tasks;
    use shiftlog::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_reaches_latest_version(_ctx: &mut MigrationTestContext) {
        let path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();
        let mut conn = Connection::open(path).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        init_with_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 2);

        // Schema is usable immediately
        conn.execute(
            "INSERT INTO tasks (id, title, date) VALUES ('t1', 'Entry', '2024-01-02')",
            [],
        )
        .unwrap();
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_idempotent(_ctx: &mut MigrationTestContext) {
        let path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();
        let mut conn = Connection::open(path).unwrap();

        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_legacy_name_hours_table_is_normalized(_ctx: &mut MigrationTestContext) {
        let path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();

        // Seed a table in the shape older releases wrote
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute(
                "CREATE TABLE tasks (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    hours REAL,
                    date TEXT NOT NULL
                )",
                [],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO tasks (id, name, hours, date) VALUES ('legacy1', 'Old entry', 3.5, '2024-01-02')",
                [],
            )
            .unwrap();
        }

        // Opening through the normal path migrates in place
        let mut tasks = Tasks::new().unwrap();
        let all = tasks.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "legacy1");
        assert_eq!(all[0].title, "Old entry");
        assert!((all[0].hours_spent - 3.5).abs() < 1e-9);
        assert_eq!(all[0].date, "2024-01-02");
        assert!(!all[0].completed);
        assert_eq!(all[0].punch_in, None);
        assert_eq!(all[0].punch_out, None);
    }
}
