use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LISTING: &str = "Ramesh Kumar\nOwner\n2 BHK Flat for Rent\nLocation: Wagholi, Pune\nBudget: ₹15,000\nCall 9876543210\nPosted 2 days ago\n";

fn leadscan(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("leadscan").unwrap();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

fn transcripts() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let shots = dir.path().join("shots");
    fs::create_dir(&shots).unwrap();

    fs::write(shots.join("01_listing.txt"), LISTING).unwrap();
    fs::write(shots.join("02_no_contact.txt"), "3 BHK in Kharadi\nRs 22,000\n").unwrap();
    fs::write(
        shots.join("Screenshot_20250909-180611_olx.txt"),
        "Sunita Patil\n+91 9123456789\n",
    )
    .unwrap();
    fs::write(
        shots.join("Screenshot_20250910-101010.txt"),
        "Repost\nCall 9876543210\nPosted today\n",
    )
    .unwrap();
    dir
}

#[test]
fn scan_writes_deduplicated_csv() {
    let dir = transcripts();
    let output = dir.path().join("leads.csv");

    leadscan(dir.path())
        .arg("scan")
        .arg(dir.path().join("shots"))
        .arg("--output")
        .arg(&output)
        .args(["--today", "2025-09-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leads saved"));

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "Name,Location,Flat Type,Budget,Contact Number,Source,Lead Age (days)"
    );
    assert_eq!(
        lines[1],
        "Ramesh Kumar,\"Wagholi, Pune\",2BHK,\"₹15,000\",9876543210,Unknown,2"
    );
    assert_eq!(lines[2], "Sunita Patil,,,,9123456789,Olx,10");
    assert_eq!(lines.len(), 3);
}

#[test]
fn scan_with_source_override_and_columns() {
    let dir = transcripts();
    let output = dir.path().join("leads.csv");

    leadscan(dir.path())
        .arg("scan")
        .arg(dir.path().join("shots"))
        .arg("-o")
        .arg(&output)
        .args(["--source", "MagicBricks", "--columns", "contact,source"])
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(
        csv,
        "Contact Number,Source\n9876543210,MagicBricks\n9123456789,MagicBricks\n"
    );
}

#[test]
fn scan_writes_xlsx_by_default() {
    let dir = transcripts();
    let output = dir.path().join("leads.xlsx");

    leadscan(dir.path())
        .arg("scan")
        .arg(dir.path().join("shots"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn scan_rejects_unknown_column() {
    let dir = transcripts();

    leadscan(dir.path())
        .arg("scan")
        .arg(dir.path().join("shots"))
        .arg("-o")
        .arg(dir.path().join("leads.csv"))
        .args(["--columns", "name,rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown column"));
}

#[test]
fn scan_empty_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();

    leadscan(dir.path())
        .arg("scan")
        .arg(dir.path().join("empty"))
        .arg("-o")
        .arg(dir.path().join("leads.xlsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found"));

    assert!(!dir.path().join("leads.xlsx").exists());
}

#[test]
fn process_prints_text_summary() {
    let dir = transcripts();

    leadscan(dir.path())
        .arg("process")
        .arg(dir.path().join("shots").join("01_listing.txt"))
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Number:  9876543210"))
        .stdout(predicate::str::contains("Flat Type:       2BHK"))
        .stdout(predicate::str::contains("Age basis:       PostedText"));
}

#[test]
fn process_json_marks_missing_contact() {
    let dir = transcripts();

    leadscan(dir.path())
        .arg("process")
        .arg(dir.path().join("shots").join("02_no_contact.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"flat_type\": \"3BHK\""))
        .stdout(predicate::str::contains("\"contact_number\": null"))
        .stderr(predicate::str::contains("No contact number found"));
}

#[test]
fn config_init_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("conf").join("leadscan.json");

    leadscan(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    leadscan(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.name_window", "3"])
        .assert()
        .success();

    leadscan(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "extraction.name_window"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
}
