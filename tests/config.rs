#[cfg(test)]
mod tests {
    use shiftlog::libs::config::{Config, TrackerConfig, DEFAULT_TARGET_HOURS};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.tracker.is_none());
        assert_eq!(config.target_hours(), DEFAULT_TARGET_HOURS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            tracker: Some(TrackerConfig { target_hours: 6.5 }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.tracker, Some(TrackerConfig { target_hours: 6.5 }));
        assert_eq!(loaded.target_hours(), 6.5);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unknown_sections_do_not_break_loading(_ctx: &mut ConfigTestContext) {
        use shiftlog::libs::config::CONFIG_FILE_NAME;
        use shiftlog::libs::data_storage::DataStorage;

        // A file written by a newer version may carry sections this build
        // does not know about
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{"tracker": {"target_hours": 7.0}, "theme": {"dark": true}}"#).unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.target_hours(), 7.0);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(_ctx: &mut ConfigTestContext) {
        use shiftlog::libs::config::CONFIG_FILE_NAME;
        use shiftlog::libs::data_storage::DataStorage;

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "not json").unwrap();

        assert!(Config::read().is_err());
    }
}
