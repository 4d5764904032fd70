//! Logging bootstrap wiring: init creates a rolling log file and reports
//! its status.

use shoplist_core::{default_log_level, init_logging, logging_status};

#[test]
fn init_creates_a_log_file_and_reports_status() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dir_str = dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8");

    init_logging(default_log_level(), dir_str).expect("logging should start");

    let (level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(level, default_log_level());
    assert_eq!(active_dir, dir.path());

    log::info!("event=log_probe module=test status=ok");

    let entries: Vec<String> = std::fs::read_dir(dir.path())
        .expect("log dir should be readable")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(
        entries
            .iter()
            .any(|name| name.starts_with("shoplist") && name.ends_with(".log")),
        "expected a shoplist log file, found {entries:?}"
    );
}
