//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary with various arguments and check its
//! output and exit status.
//!
//! # Test Categories
//!
//! - **Analyze**: text and JSON reports, sender and date filters
//! - **Users**: participant listing
//! - **Export**: CSV, JSON, JSONL record export
//! - **Error handling**: rejected files and bad options exit with code 1
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with test exports.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let android = "\
1/15/24, 10:30 am - Messages and calls are end-to-end encrypted. No one outside of this chat, including WhatsApp, can read or listen to them. Tap to learn more.
1/15/24, 10:30 am - Alice: Hello everyone! 👋
1/15/24, 10:31 am - Bob: Hi Alice!
1/15/24, 10:32 am - Alice: <Media omitted>
1/15/24, 10:33 am - Charlie: check https://example.com
2/20/24, 9:00 pm - Bob: pizza tonight?
2/20/24, 9:05 pm - Alice: pizza yes 🍕
";
    fs::write(dir.path().join("chat.txt"), android).unwrap();

    let ios = "\
[15/01/2024, 10:30:00] Anna: Hallo
[15/01/2024, 10:31:00] Ben: Hi
";
    fs::write(dir.path().join("ios.txt"), ios).unwrap();

    fs::write(dir.path().join("chat.json"), android).unwrap();
    fs::write(dir.path().join("notes.txt"), "just some notes\nnothing else\n").unwrap();
    fs::write(dir.path().join("broken.txt"), [0x31u8, 0xff, 0xfe]).unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"analysis": {"top_words": 1, "media_placeholders": ["<Media omitted>"]}}"#,
    )
    .unwrap();
    fs::write(dir.path().join("bad_config.json"), "{ not json").unwrap();

    dir
}

fn chatlens_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlens"));
    Command::from_std(cmd)
}

fn path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Analyze
// ============================================================================

mod analyze {
    use super::*;

    #[test]
    fn test_text_report() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Chat analysis for: all"))
            .stdout(predicate::str::contains("Total Messages: 7"))
            .stdout(predicate::str::contains("Media Shared:   1"))
            .stdout(predicate::str::contains("Links Shared:   1"))
            .stdout(predicate::str::contains("February 2024"))
            .stdout(predicate::str::contains("Most Busy Users"))
            .stdout(predicate::str::contains("pizza"));
    }

    #[test]
    fn test_json_report() {
        let dir = setup_fixtures();

        let output = chatlens_cmd()
            .args(["analyze", "--format", "json"])
            .arg(path(&dir, "chat.txt"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["sender"], "all");
        assert_eq!(value["counts"]["messages"], 7);
        assert_eq!(value["monthly_timeline"].as_array().unwrap().len(), 2);
        assert_eq!(value["most_active_senders"]["top"][0]["sender"], "Alice");
        assert_eq!(value["common_words"][0]["word"], "pizza");
    }

    #[test]
    fn test_single_user() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "chat.txt"))
            .args(["--user", "Bob"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chat analysis for: Bob"))
            .stdout(predicate::str::contains("Total Messages: 2"))
            .stdout(predicate::str::contains("Most Busy Users").not())
            .stdout(predicate::str::contains(
                "No emoji data available for the selected sender.",
            ));
    }

    #[test]
    fn test_date_window() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "chat.txt"))
            .args(["--after", "2024-02-01", "--before", "2024-02-29"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Messages: 2"))
            .stdout(predicate::str::contains("January 2024").not());
    }

    #[test]
    fn test_output_file() {
        let dir = setup_fixtures();
        let report = path(&dir, "report.json");

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "chat.txt"))
            .args(["-f", "json", "-o"])
            .arg(&report)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(value["counts"]["messages"], 7);
    }

    #[test]
    fn test_config_file_and_override() {
        let dir = setup_fixtures();

        let output = chatlens_cmd()
            .args(["analyze", "--format", "json", "--config"])
            .arg(path(&dir, "config.json"))
            .arg(path(&dir, "chat.txt"))
            .output()
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["common_words"].as_array().unwrap().len(), 1);

        let output = chatlens_cmd()
            .args(["analyze", "--format", "json", "--top-words", "3", "--config"])
            .arg(path(&dir, "config.json"))
            .arg(path(&dir, "chat.txt"))
            .output()
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["common_words"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_ios_export() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "ios.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Messages: 2"))
            .stdout(predicate::str::contains("January 2024"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .env_remove("RUST_LOG")
            .args(["-v", "analyze"])
            .arg(path(&dir, "chat.txt"))
            .assert()
            .success()
            .stderr(predicate::str::contains("parsed"));
    }
}

// ============================================================================
// Users
// ============================================================================

mod users {
    use super::*;

    #[test]
    fn test_lists_sorted_participants() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("users")
            .arg(path(&dir, "chat.txt"))
            .assert()
            .success()
            .stdout("all\nAlice\nBob\nCharlie\n");
    }
}

// ============================================================================
// Export
// ============================================================================

mod export {
    use super::*;

    #[test]
    fn test_csv_to_stdout() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("export")
            .arg(path(&dir, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "timestamp;date;year;month_num;month;day;day_name;hour;minute;period;sender;body",
            ))
            .stdout(predicate::str::contains(
                "2024-01-15 10:31:00;2024-01-15;2024;1;January;15;Monday;10;31;10-11;Bob;Hi Alice!",
            ));
    }

    #[test]
    fn test_format_inferred_from_output_path() {
        let dir = setup_fixtures();
        let out = path(&dir, "records.jsonl");

        chatlens_cmd()
            .arg("export")
            .arg(path(&dir, "chat.txt"))
            .arg("-o")
            .arg(&out)
            .assert()
            .success();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content.lines().count(), 7);
        for line in content.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["sender"].is_string());
        }
    }

    #[test]
    fn test_json_array() {
        let dir = setup_fixtures();

        let output = chatlens_cmd()
            .args(["export", "--format", "json"])
            .arg(path(&dir, "chat.txt"))
            .output()
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0]["sender"], "system");
        assert_eq!(rows[5]["period"], "21-22");
    }

    #[test]
    fn test_csv_file_is_readable() {
        let dir = setup_fixtures();
        let out = path(&dir, "records.csv");

        chatlens_cmd()
            .arg("export")
            .arg(path(&dir, "chat.txt"))
            .arg("-o")
            .arg(&out)
            .assert()
            .success();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&out)
            .unwrap();
        assert_eq!(reader.records().count(), 7);
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_wrong_extension() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "chat.json"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::starts_with("Error: "))
            .stderr(predicate::str::contains("TXT file exported from WhatsApp"));
    }

    #[test]
    fn test_not_an_export() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("users")
            .arg(path(&dir, "notes.txt"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("No messages found"));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "broken.txt"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("UTF-8"));
    }

    #[test]
    fn test_missing_file() {
        chatlens_cmd()
            .args(["analyze", "/definitely/not/here.txt"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: IO error"));
    }

    #[test]
    fn test_unknown_user() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "chat.txt"))
            .args(["--user", "Mallory"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Unknown sender 'Mallory'"));
    }

    #[test]
    fn test_invalid_date() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "chat.txt"))
            .args(["--after", "15/01/2024"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_bad_config() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("analyze")
            .arg(path(&dir, "chat.txt"))
            .arg("--config")
            .arg(path(&dir, "bad_config.json"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn test_unknown_export_extension() {
        let dir = setup_fixtures();

        chatlens_cmd()
            .arg("export")
            .arg(path(&dir, "chat.txt"))
            .arg("-o")
            .arg(path(&dir, "records.xml"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Invalid output format"));
    }

    #[test]
    fn test_missing_subcommand() {
        chatlens_cmd().assert().failure();
    }
}
