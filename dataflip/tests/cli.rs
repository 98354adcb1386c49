//! End-to-end tests of the `dataflip` binary that need no database.

use std::{path::Path, process::Command};

use tempfile::TempDir;

fn dataflip(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dataflip"));
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_then_check() {
    let temp = TempDir::new().unwrap();

    let init = dataflip(temp.path()).arg("init").output().unwrap();
    assert!(init.status.success());
    assert!(temp.path().join("dataflip.toml").exists());

    let check = dataflip(temp.path()).arg("check").output().unwrap();
    let stdout = String::from_utf8_lossy(&check.stdout);
    assert!(check.status.success(), "{stdout}");
    assert!(stdout.contains("dataflip.toml is valid"));
    assert!(stdout.contains("AppContext (App.Data)"));
    assert!(stdout.contains("count_users -> CountUsers (scalar int)"));
}

#[test]
fn init_force_overwrites() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(&path, "old").unwrap();

    let init = dataflip(temp.path())
        .args(["init", "-o", "custom.toml", "--force"])
        .output()
        .unwrap();

    assert!(init.status.success());
    assert!(std::fs::read_to_string(&path).unwrap().contains("[[contexts]]"));
}

#[test]
fn check_missing_manifest_fails() {
    let temp = TempDir::new().unwrap();

    let check = dataflip(temp.path()).arg("check").output().unwrap();

    assert_eq!(check.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&check.stderr).contains("dataflip init"));
}

#[test]
fn check_reports_invalid_manifest() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("dataflip.toml"),
        r#"
[[contexts]]
name = "Cool"
namespace = "Hello"
database = { url = "postgres://localhost/db" }
output = { host = "Cool.cs" }

[[contexts.procedures]]
name = "dbo.GetUsers"
"#,
    )
    .unwrap();

    let check = dataflip(temp.path()).arg("check").output().unwrap();

    assert_eq!(check.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&check.stderr).contains("method"));
}

#[test]
fn generate_without_connection_env_writes_nothing() {
    let temp = TempDir::new().unwrap();
    assert!(dataflip(temp.path()).arg("init").status().unwrap().success());

    let generate = dataflip(temp.path())
        .arg("generate")
        .env_remove("DATABASE_URL")
        .output()
        .unwrap();

    assert!(!generate.status.success());
    assert!(
        String::from_utf8_lossy(&generate.stderr)
            .contains("environment variable 'DATABASE_URL' is not set")
    );
    assert!(!temp.path().join("generated").exists());
}

#[test]
fn generate_unknown_context_fails() {
    let temp = TempDir::new().unwrap();
    assert!(dataflip(temp.path()).arg("init").status().unwrap().success());

    let generate = dataflip(temp.path())
        .args(["generate", "--context", "Nope"])
        .output()
        .unwrap();

    assert!(!generate.status.success());
    assert!(String::from_utf8_lossy(&generate.stderr).contains("available: AppContext"));
}
