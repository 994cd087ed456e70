use assert_cmd::Command;
use predicates::prelude::*;

const CREDENTIAL_VARS: [&str; 6] = [
    "TRELLO_API_KEY",
    "TRELLO_TOKEN",
    "TRELLO_BOARD_ID",
    "VITE_TRELLO_API_KEY",
    "VITE_TRELLO_TOKEN",
    "VITE_TRELLO_BOARD_ID",
];

/// Helper function to create a Command with --no-color and a clean
/// credential environment
fn shopboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shopboard").expect("Failed to find shopboard binary");
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("SHOPBOARD_TITLE")
        .env_remove("SHOPBOARD_API_BASE_URL")
        .arg("--no-color");
    cmd
}

#[test]
fn test_snapshot_without_credentials_shows_config_status() {
    shopboard_cmd()
        .arg("snapshot")
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1 of 1"))
        .stdout(predicate::str::contains(
            "Error: board credentials not configured",
        ))
        .stdout(predicate::str::contains("Model / Plate").not());
}

#[test]
fn test_snapshot_json_without_credentials() {
    shopboard_cmd()
        .args(["snapshot", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""board_name": "Error: board credentials not configured""#,
        ))
        .stdout(predicate::str::contains(r#""total_pages": 1"#))
        .stdout(predicate::str::contains(r#""vehicle_count": 0"#))
        .stdout(predicate::str::contains(r#""slot": "empty""#).count(6));
}

#[test]
fn test_snapshot_with_unreachable_board_shows_connection_status() {
    shopboard_cmd()
        .env("TRELLO_API_KEY", "key")
        .env("TRELLO_TOKEN", "token")
        .env("TRELLO_BOARD_ID", "board")
        .args(["--api-base-url", "http://127.0.0.1:9", "snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connection error"));
}

#[test]
fn test_vite_credentials_are_accepted() {
    shopboard_cmd()
        .env("VITE_TRELLO_API_KEY", "key")
        .env("VITE_TRELLO_TOKEN", "token")
        .env("VITE_TRELLO_BOARD_ID", "board")
        .args(["--api-base-url", "http://127.0.0.1:9", "snapshot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connection error"))
        .stdout(predicate::str::contains("not configured").not());
}

#[test]
fn test_zero_rotation_interval_is_rejected() {
    shopboard_cmd()
        .args(["run", "--rotate-secs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dashboard settings"))
        .stderr(predicate::str::contains(
            "rotation interval must be positive",
        ));
}

#[test]
fn test_oversized_rotation_interval_is_rejected() {
    shopboard_cmd()
        .args(["run", "--rotate-secs", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dashboard settings"))
        .stderr(predicate::str::contains("intervals must not exceed 86400s"));
}

#[test]
fn test_help_lists_commands() {
    shopboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("snapshot"));
}
