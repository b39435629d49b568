// CLI integration tests: every command prints one JSON value; errors carry stable exit codes.
use std::process::{Command, Output};

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_bunplate");
    let mut command = Command::new(exe);
    command
        .env_remove("BUNPLATE_APP_NAME")
        .env_remove("BUNPLATE_APP_DESCRIPTION")
        .env_remove("BUNPLATE_APP_URL")
        .env_remove("RUST_LOG");
    command
}

fn run(args: &[&str]) -> Output {
    cmd().args(args).output().expect("run bunplate")
}

fn stdout_json(output: &Output) -> Value {
    let text = std::str::from_utf8(&output.stdout).expect("utf8");
    serde_json::from_str(text.trim()).expect("valid json")
}

fn stderr_json(output: &Output) -> Value {
    let text = String::from_utf8_lossy(&output.stderr);
    let line = text.lines().last().expect("error line");
    serde_json::from_str(line).expect("valid json")
}

#[test]
fn bytes_and_slug_commands() {
    let bytes = run(&["bytes", "1536", "--decimals", "1"]);
    assert!(bytes.status.success());
    assert_eq!(stdout_json(&bytes)["formatted"], "1.5 KB");

    let slug = run(&["slug", "Hello, World! 123"]);
    assert!(slug.status.success());
    assert_eq!(stdout_json(&slug)["slug"], "hello-world-123");
}

#[test]
fn date_command_rejects_unparseable_input() {
    let ok = run(&["date", "2023-12-25"]);
    assert!(ok.status.success());
    assert_eq!(stdout_json(&ok)["formatted"], "December 25, 2023");

    let bad = run(&["date", "next tuesday"]);
    assert_eq!(bad.status.code(), Some(3));
    assert_eq!(stderr_json(&bad)["error"]["kind"], "InvalidArgument");
}

#[test]
fn validation_commands_report_booleans() {
    let email = run(&["email", "test@example.com"]);
    assert_eq!(stdout_json(&email)["valid"], true);

    let url = run(&["url", "ftp://example"]);
    assert!(url.status.success());
    assert_eq!(stdout_json(&url)["valid"], false);
}

#[test]
fn chunk_command_and_zero_size() {
    let ok = run(&["chunk", "--size", "2", "a", "b", "c"]);
    assert!(ok.status.success());
    assert_eq!(
        stdout_json(&ok)["chunks"],
        serde_json::json!([["a", "b"], ["c"]])
    );

    let zero = run(&["chunk", "--size", "0", "a"]);
    assert_eq!(zero.status.code(), Some(3));
    let err = stderr_json(&zero);
    assert_eq!(err["error"]["kind"], "InvalidArgument");
    assert!(err["error"]["hint"].is_string());
}

#[test]
fn pick_preserves_key_order() {
    let output = run(&["pick", r#"{"c":3,"a":1,"b":2}"#, "a", "c"]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert_eq!(text.trim(), r#"{"c":3,"a":1}"#);

    let bad = run(&["omit", "[1,2]", "a"]);
    assert_eq!(bad.status.code(), Some(3));
}

#[test]
fn random_command_respects_length() {
    let output = run(&["random", "24"]);
    assert!(output.status.success());
    let value = stdout_json(&output);
    let text = value["value"].as_str().expect("string");
    assert_eq!(text.len(), 24);
    assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn locale_and_theme_commands() {
    let path = run(&["locale", "path", "/en/about", "--locale", "cs"]);
    assert!(path.status.success());
    assert_eq!(stdout_json(&path)["localized"], "/cs/about");

    let negotiated = run(&["locale", "negotiate", "de,cs;q=0.4"]);
    assert_eq!(stdout_json(&negotiated)["locale"], "cs");

    let list = run(&["locale", "list"]);
    assert_eq!(stdout_json(&list)["locales"].as_array().map(Vec::len), Some(2));

    let theme = run(&["theme", "system", "--prefers-dark", "--toggle"]);
    let value = stdout_json(&theme);
    assert_eq!(value["theme"], "light");
    assert_eq!(value["resolved"], "light");

    let unknown = run(&["locale", "path", "/", "--locale", "xx"]);
    assert_eq!(unknown.status.code(), Some(3));
}

#[test]
fn config_strict_surfaces_bad_url() {
    let defaults = run(&["config"]);
    assert!(defaults.status.success());
    assert_eq!(stdout_json(&defaults)["config"]["app_name"], "BunPlate");

    let lenient = cmd()
        .args(["config"])
        .env("BUNPLATE_APP_URL", "not a url")
        .output()
        .expect("run");
    assert!(lenient.status.success());
    assert_eq!(
        stdout_json(&lenient)["config"]["app_url"],
        "http://localhost:3000"
    );

    let strict = cmd()
        .args(["config", "--strict"])
        .env("BUNPLATE_APP_URL", "not a url")
        .output()
        .expect("run");
    assert_eq!(strict.status.code(), Some(4));
    assert_eq!(stderr_json(&strict)["error"]["kind"], "Config");
}

#[test]
fn unknown_flag_is_usage_error() {
    let output = run(&["bytes", "10", "--bogus"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["kind"], "Usage");
}
