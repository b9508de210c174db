use cssscan::testing::FixtureDocument;
use inspector::log_init::{LogInitError, init_logger, init_logger_with_level};
use inspector::{Inspector, Settings};
use log::LevelFilter;

#[test]
fn test_unwritable_path_is_reported() {
    let path = std::env::temp_dir()
        .join("inspector-missing-dir")
        .join("nested")
        .join("session.log");
    assert!(matches!(
        init_logger(&path),
        Err(LogInitError::Open { .. })
    ));
}

#[test]
fn test_session_activity_is_written_to_the_file() {
    let path = std::env::temp_dir().join(format!("inspector-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    init_logger_with_level(&path, LevelFilter::Debug).unwrap();

    let mut doc = FixtureDocument::new();
    doc.add_css("p { color: red; }");
    let mut session = Inspector::new(doc, Settings::default());
    session.rebuild_index();
    log::trace!("below the threshold");
    log::logger().flush();

    assert!(matches!(
        init_logger_with_level(&path, LevelFilter::Info),
        Err(LogInitError::AlreadySet(_))
    ));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(
        contents
            .lines()
            .any(|line| line.starts_with("DEBUG inspector::session: inspector: index rebuilt"))
    );
    assert!(!contents.contains("below the threshold"));
    let _ = std::fs::remove_file(&path);
}
