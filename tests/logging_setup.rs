//! The global logger can only be started once per process, so this file
//! holds a single test.

use connect_four::config::LoggingConfig;
use connect_four::logging::setup_logging;

#[test]
fn file_logging_writes_into_configured_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        level: "info".to_string(),
        directory: Some(dir.path().to_path_buf()),
    };

    let handle = setup_logging(&config, false)
        .unwrap()
        .expect("a directory is configured, so a logger starts");
    log::error!("logger smoke line");
    handle.flush();

    let mut contents = String::new();
    for entry in std::fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("connect_four"), "unexpected file {name}");
        contents.push_str(&std::fs::read_to_string(&path).unwrap());
    }

    assert!(contents.contains("logger smoke line"));
}
