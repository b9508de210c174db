use css_scanner::{ScannerError, init_logging};

#[test]
fn test_init_logging_installs_once() {
    let path = std::env::temp_dir().join(format!("css-scanner-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    init_logging(&path).unwrap();
    assert!(matches!(init_logging(&path), Err(ScannerError::Logger(_))));

    log::logger().flush();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("css-scanner: logging to"));
    let _ = std::fs::remove_file(&path);
}
