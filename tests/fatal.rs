use config_ini::fatal::{OrDie, FATAL_EXIT_CODE};
use config_ini::logger::LocalLogger;
use config_ini::ConfigIni;
use std::env;
use std::fs;
use std::process::Command;

/// Selects the lookup `run_fatal_lookup` performs in the re-run test
/// binary.
const FATAL_CASE_ENV: &str = "CONFIG_INI_FATAL_CASE";

/// Path of the configuration file the re-run test binary loads.
const FATAL_FILE_ENV: &str = "CONFIG_INI_FATAL_FILE";

/// Does nothing unless started by `run_case`.  When started, performs
/// a lookup that must stop the process; returning normally makes the
/// test binary exit with status 0, which `run_case` rejects.
#[test]
fn run_fatal_lookup() {
    let case = match env::var(FATAL_CASE_ENV) {
        Ok(case) => case,
        Err(_) => return,
    };
    let logger = LocalLogger::new("FATAL");
    let mut config = ConfigIni::new();
    if let Ok(path) = env::var(FATAL_FILE_ENV) {
        config.load_from_path(path).unwrap();
    }
    match case.as_str() {
        "value" => {
            config.value_or_die("db", "host", &logger);
        }
        "session" => {
            config.session_or_die("web", &logger);
        }
        "update" => {
            config.update_value_or_die("db", "port", &logger, |v| v.push('0'));
        }
        other => panic!("unknown case: {}", other),
    }
}

/// Re-runs this test binary with only `run_fatal_lookup` selected and
/// returns its exit code and standard error.
fn run_case(case: &str, config_text: Option<&str>) -> (Option<i32>, String) {
    let dir = tempfile::tempdir().unwrap();
    let mut command = Command::new(env::current_exe().unwrap());
    command
        .args(["run_fatal_lookup", "--exact", "--nocapture", "--test-threads=1"])
        .env(FATAL_CASE_ENV, case)
        .env_remove(FATAL_FILE_ENV);
    if let Some(text) = config_text {
        let path = dir.path().join("app.ini");
        fs::write(&path, text).unwrap();
        command.env(FATAL_FILE_ENV, &path);
    }
    let output = command.output().unwrap();
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn value_or_die_exits_when_nothing_is_loaded() {
    let (code, stderr) = run_case("value", None);
    assert_eq!(code, Some(FATAL_EXIT_CODE), "stderr: {}", stderr);
    assert!(
        stderr.contains("Fatal: value_or_die: config not loaded"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn session_or_die_exits_on_missing_session() {
    let (code, stderr) = run_case("session", Some("[db]\nhost=localhost\n"));
    assert_eq!(code, Some(FATAL_EXIT_CODE), "stderr: {}", stderr);
    assert!(
        stderr.contains("Fatal: session_or_die: session [web] does not exist"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn update_value_or_die_exits_on_missing_key() {
    let (code, stderr) = run_case("update", Some("[db]\nhost=localhost\n"));
    assert_eq!(code, Some(FATAL_EXIT_CODE), "stderr: {}", stderr);
    assert!(
        stderr.contains("Fatal: update_value_or_die: key [port] does not exist in session [db]"),
        "stderr: {}",
        stderr
    );
}
