use config_ini::{ConfigIni, ErrorType};
use std::fs;
use std::path::{Path, PathBuf};

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn kind<'a>(error: &'a (dyn std::error::Error + 'static)) -> &'a ErrorType {
    error.downcast_ref::<ErrorType>().unwrap()
}

#[test]
fn loads_file_and_records_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "db.ini", "[db]\nhost=localhost\nport=5432\n");

    let mut config = ConfigIni::new();
    config.load_from_path(&path).unwrap();

    assert!(config.is_loaded());
    assert_eq!(config.source_path(), Some(path.as_path()));
    assert_eq!(config.value("db", "host").unwrap(), "localhost");
    assert_eq!(config.value("db", "port").unwrap(), "5432");
}

#[test]
fn missing_file_returns_raw_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ConfigIni::new();

    let error = config
        .load_from_path(dir.path().join("absent.ini"))
        .unwrap_err();
    let io = error.downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    assert!(!config.is_loaded());
}

#[test]
fn parse_error_leaves_nothing_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "bad.ini", "[db]\nhost=localhost\nhost=remote\n");

    let mut config = ConfigIni::new();
    let error = config.load_from_path(&path).unwrap_err();
    assert!(matches!(
        kind(error.as_ref()),
        ErrorType::DuplicateKey { line: 3, .. }
    ));
    assert!(!config.is_loaded());
    assert!(config.config_set().is_none());
}

#[test]
fn failed_reload_keeps_previous_config() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "good.ini", "[db]\nhost=localhost\n");
    let empty = write(dir.path(), "empty.ini", "   \n# just a comment\n");

    let mut config = ConfigIni::new();
    config.load_from_path(&good).unwrap();
    let error = config.load_from_path(&empty).unwrap_err();

    assert!(matches!(kind(error.as_ref()), ErrorType::EmptyConfig));
    assert_eq!(config.source_path(), Some(good.as_path()));
    assert_eq!(config.value("db", "host").unwrap(), "localhost");
}

#[test]
fn reload_replaces_previous_config() {
    let dir = tempfile::tempdir().unwrap();
    let first = write(dir.path(), "first.ini", "[a]\nx=1\n");
    let second = write(dir.path(), "second.ini", "[b]\ny=2\n");

    let mut config = ConfigIni::new();
    config.load_from_path(&first).unwrap();
    config.load_from_path(&second).unwrap();

    assert_eq!(config.session_names(), vec!["b"]);
    assert_eq!(config.source_path(), Some(second.as_path()));
    assert!(matches!(
        kind(config.value("a", "x").unwrap_err().as_ref()),
        ErrorType::SessionNotFound(_)
    ));
}

#[test]
fn empty_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "empty.ini", "");

    let error = ConfigIni::new().load_from_path(&path).unwrap_err();
    assert!(matches!(kind(error.as_ref()), ErrorType::EmptyConfig));
}

#[test]
fn syntax_error_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "bad.ini", "[db]\n\n# ok so far\nnot a valid line\n");

    let error = ConfigIni::new().load_from_path(&path).unwrap_err();
    assert!(matches!(kind(error.as_ref()), ErrorType::LineSyntax { line: 4 }));
    assert_eq!(error.to_string(), "line 4: error ini config content");
}
