use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the binary with its data directory redirected into a temp dir and
/// every HTTP(S) request routed to a closed local port, so a search fails
/// fast with a network error instead of reaching the real site.
fn emoterm(args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();
    let dead_proxy = "http://127.0.0.1:9";
    Command::new(env!("CARGO_BIN_EXE_emoterm"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("HTTPS_PROXY", dead_proxy)
        .env("https_proxy", dead_proxy)
        .env("HTTP_PROXY", dead_proxy)
        .env("http_proxy", dead_proxy)
        .env_remove("NO_PROXY")
        .env_remove("no_proxy")
        .env_remove("EMOTERM_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn no_query_exits_with_status_one() {
    let output = emoterm(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cant search without a query :3"));
    assert!(output.stdout.is_empty());
}

#[test]
fn blank_query_exits_with_status_one() {
    let output = emoterm(&["  "]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_succeeds() {
    let output = emoterm(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("QUERY"));
    assert!(!stdout.contains("hold-clipboard"));
}

#[test]
fn extra_dash_arguments_reach_the_search() {
    let output = emoterm(&["cat", "--bogus", "-x"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("Maybe check your internet connection"), "{stderr}");
    assert!(!stderr.contains("unexpected argument"));
}

#[test]
fn dash_leading_query_reaches_the_search() {
    let output = emoterm(&["-_-"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Maybe check your internet connection"));
}

#[test]
fn invalid_option_usage_exits_with_status_one() {
    let output = emoterm(&["--theme"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn hold_mode_with_empty_input_exits_cleanly() {
    let output = emoterm(&["--hold-clipboard"]);

    assert!(output.status.success());
    assert!(!stderr(&output).contains("Cant search without a query"));
}
