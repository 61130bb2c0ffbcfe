//! CLI tests that need no secret store.
//!
//! A config without references never builds a store client, so these run
//! in every build.

mod support;
use support::*;

#[test]
fn test_no_config_prints_nothing() {
    let t = Test::new();
    let output = t.smenv(&[]);
    assert_success(&output);
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_empty_config_file() {
    let t = Test::with_config("# nothing yet\n");
    let output = t.smenv(&[]);
    assert_success(&output);
    assert_eq!(stdout(&output), "");
}

#[cfg(unix)]
#[test]
fn test_run_without_secrets() {
    let t = Test::new();
    let output = t.run(&["echo", "hello"]);
    assert_success(&output);
    assert_stdout_contains(&output, "hello");
}

#[cfg(unix)]
#[test]
fn test_run_exit_code_passthrough() {
    let t = Test::new();
    let output = t.run(&["sh", "-c", "exit 42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[cfg(unix)]
#[test]
fn test_run_passes_hyphenated_args() {
    let t = Test::new();
    let output = t.run(&["sh", "-c", "echo \"$1\"", "sh", "--not-a-flag"]);
    assert_success(&output);
    assert_stdout_contains(&output, "--not-a-flag");
}

#[cfg(unix)]
#[test]
fn test_run_inherits_environment() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("SMENV_INHERITED", "kept")
        .args(["--", "sh", "-c", "echo $SMENV_INHERITED"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "kept");
}

#[test]
fn test_missing_explicit_config() {
    let t = Test::new();
    let output = t.smenv(&["--config", "nope.toml"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
    assert_stderr_contains(&output, "--config");
}

#[test]
fn test_config_from_env_var() {
    let t = Test::new();
    t.write("other.toml", "not = [valid");
    let output = t.cmd().env("SMENV_CONFIG", "other.toml").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config file");
}

#[test]
fn test_malformed_config() {
    let t = Test::with_config("[secret_strings\nA = \"b\"\n");
    let output = t.smenv(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config file");
}

#[test]
fn test_unknown_config_table() {
    let t = Test::with_config("[secrets]\nA = \"b\"\n");
    let output = t.smenv(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config file");
}

#[test]
fn test_invalid_name_in_config() {
    let t = Test::with_config("[secret_strings]\n\"A=B\" = \"x\"\n");
    t.cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "invalid environment variable name 'A=B'",
        ));
}

#[test]
fn test_empty_name_flag() {
    let t = Test::new();
    t.cmd()
        .args(["--string", "=prod/db"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_malformed_flag() {
    let t = Test::new();
    let output = t.smenv(&["--string", "NO_EQUALS_SIGN"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid assignment 'NO_EQUALS_SIGN'");
}

#[test]
fn test_json_flag_requires_key() {
    let t = Test::new();
    let output = t.smenv(&["--json-key", "DB=prod/db"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "NAME=SECRET_ID#JSON_KEY");
}

#[test]
fn test_version() {
    let t = Test::new();
    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();
    let output = t.smenv(&[]);
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output, got: {}",
        err
    );
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::new();
    let output = t.smenv(&["--verbose"]);
    assert_success(&output);
    assert_stderr_contains(&output, "no secrets configured");
    // Logs never go to stdout
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_log_env_var() {
    let t = Test::new();
    let output = t.cmd().env("SMENV_LOG", "smenv=debug").output().unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "no config file, starting empty");
}
