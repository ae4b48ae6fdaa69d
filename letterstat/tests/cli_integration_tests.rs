// letterstat/tests/cli_integration_tests.rs
//! Command-line integration tests for the `letterstat` binary.
//!
//! Each test writes its corpus into a temporary file, runs the binary with
//! `assert_cmd` and checks stdout/stderr after stripping ANSI escapes.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

const PANGRAM: &str = "Съешь же ещё этих мягких французских булок, да выпей же чаю!\n\
    В чащах юга жил бы цитрус? Да, но фальшивый экземпляр!";

fn letterstat() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("letterstat"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn corpus(content: &[u8]) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile()?;
    file.write_all(content)?;
    Ok(file)
}

fn strip_ansi(s: &[u8]) -> String {
    let cleaned = strip_ansi_escapes_fn(s);
    String::from_utf8_lossy(&cleaned).to_string()
}

#[test]
fn test_no_arguments_prints_help() {
    letterstat()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_analyze_prints_metrics_table() -> Result<()> {
    let file = corpus(PANGRAM.as_bytes())?;
    let output = letterstat()
        .args(["analyze", "-f"])
        .arg(file.path())
        .output()?;

    assert!(output.status.success());
    let stdout = strip_ansi(&output.stdout);
    for label in [
        "H1",
        "H1 with ws",
        "H2 not overlapped",
        "H2 not overlapped with ws",
        "H2 overlapping",
        "H2 overlapping with ws",
    ] {
        assert!(stdout.contains(label), "missing {} in:\n{}", label, stdout);
    }
    assert!(stdout.contains("Encoding: UTF-8"));
    Ok(())
}

#[test]
fn test_repeated_letter_has_zero_entropy() -> Result<()> {
    let file = corpus("аааа".as_bytes())?;
    let output = letterstat()
        .args(["analyze", "--json-stdout", "-f"])
        .arg(file.path())
        .output()?;

    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let h1 = &reports[0]["metrics"][0];
    assert_eq!(h1["label"], "H1");
    assert_eq!(h1["entropy"], 0.0);
    assert_eq!(h1["redundancy"], 1.0);
    assert_eq!(h1["total"], 4);
    assert_eq!(reports[0]["folds"][0], serde_json::json!(["ё", "е"]));
    Ok(())
}

#[test]
fn test_single_letter_reports_empty_bigram_policies() -> Result<()> {
    let file = corpus("а".as_bytes())?;
    let output = letterstat()
        .args(["analyze", "--json-stdout", "-f"])
        .arg(file.path())
        .output()?;

    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let metrics = reports[0]["metrics"].as_array().cloned().unwrap_or_default();
    assert_eq!(metrics.len(), 6);
    assert!(metrics[0]["error"].is_null());
    assert!(metrics[4]["entropy"].is_null());
    assert!(metrics[4]["error"].is_string());
    Ok(())
}

#[test]
fn test_empty_policies_are_reported_as_warning() -> Result<()> {
    let file = corpus("а".as_bytes())?;
    let output = letterstat()
        .args(["analyze", "-f"])
        .arg(file.path())
        .output()?;

    assert!(output.status.success());
    let stderr = strip_ansi(&output.stderr);
    assert!(
        stderr.contains("Warning: ") && stderr.contains("4 policy combination(s) had no observations."),
        "unexpected stderr:\n{}",
        stderr
    );

    letterstat()
        .args(["--quiet", "analyze", "-f"])
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:").not());
    Ok(())
}

#[test]
fn test_windows_1251_input_is_decoded() -> Result<()> {
    let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode(PANGRAM);
    let file = corpus(&bytes)?;
    let output = letterstat()
        .args(["analyze", "--json-stdout", "-f"])
        .arg(file.path())
        .output()?;

    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(reports[0]["encoding"], "windows-1251");
    assert!(reports[0]["metrics"][0]["total"].as_u64().unwrap_or(0) > 50);
    Ok(())
}

#[test]
fn test_missing_and_binary_files_fail_but_others_are_analyzed() -> Result<()> {
    let good = corpus("абв где".as_bytes())?;
    let binary = corpus(b"\0\x01\x02binary")?;
    let output = letterstat()
        .args(["analyze", "-f"])
        .arg(good.path())
        .arg("/no/such/corpus.txt")
        .arg(binary.path())
        .output()?;

    assert!(!output.status.success());
    let stdout = strip_ansi(&output.stdout);
    let stderr = strip_ansi(&output.stderr);
    assert!(stdout.contains("H2 overlapping with ws"));
    assert!(stderr.contains("does not exist"));
    assert!(stderr.contains("binary"));
    assert!(stderr.contains("2 of 3 file(s) could not be analyzed"));
    Ok(())
}

#[test]
fn test_stats_dir_export() -> Result<()> {
    let file = corpus(PANGRAM.as_bytes())?;
    let out_dir = TempDir::new()?;
    let stem = file.path().file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();

    letterstat()
        .args(["analyze", "--stats-dir"])
        .arg(out_dir.path())
        .arg("-f")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Statistics written to"));

    let exported = out_dir.path().join(format!("{}_stats.json", stem));
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(exported)?)?;
    let names: Vec<&str> = json["sheets"]
        .as_array()
        .map(|sheets| sheets.iter().filter_map(|s| s["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(
        names,
        [
            "CO_MG", "CO_MG_WS", "CO_BG_NOT_OV", "CO_BG_NOT_OV_WS", "CO_BG_OV", "CO_BG_OV_WS",
            "MG_FR", "MG_FR_WS", "BG_FR_NOT_OV", "BG_FR_NOT_OV_WS", "BG_FR_OV", "BG_FR_OV_WS",
        ]
    );
    assert!(json["generated_at"].is_string());
    Ok(())
}

#[test]
fn test_custom_config_restricts_policies() -> Result<()> {
    let file = corpus(PANGRAM.as_bytes())?;
    let mut config = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    writeln!(config, "policies:\n  - order: monogram\n    include_whitespace: true\nreport:\n  precision: 2")?;

    let output = letterstat()
        .args(["analyze", "--json-stdout", "--config"])
        .arg(config.path())
        .arg("-f")
        .arg(file.path())
        .output()?;

    assert!(output.status.success());
    assert!(strip_ansi(&output.stderr).contains("Using analysis config"));
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let metrics = reports[0]["metrics"].as_array().cloned().unwrap_or_default();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0]["label"], "H1 with ws");
    assert_eq!(metrics[0]["alphabet_size"], 32);
    Ok(())
}

#[test]
fn test_analyze_with_chart_and_top() -> Result<()> {
    let file = corpus("ааааббв".as_bytes())?;
    let output = letterstat()
        .args(["analyze", "--chart", "--top", "2", "-f"])
        .arg(file.path())
        .output()?;

    assert!(output.status.success());
    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("Top letters"));
    assert!(stdout.contains("Letter frequencies"));
    assert!(stdout.contains('█'));
    Ok(())
}

#[test]
fn test_chart_from_inline_series() {
    letterstat()
        .args(["chart", "--labels", "а,б,в", "--values", "4,2,1.5", "--show-values", "--width", "8", "--title", "Demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo"))
        .stdout(predicate::str::contains("а │████████ 4"))
        .stdout(predicate::str::contains("1.5000"));
}

#[test]
fn test_chart_to_file() -> Result<()> {
    let dir = TempDir::new()?;
    let series = dir.path().join("series.json");
    fs::write(&series, r#"[{"label": "о", "value": 10}, {"label": "е", "value": 5}]"#)?;
    let out = dir.path().join("chart.txt");

    letterstat()
        .args(["chart", "--show-values", "--input"])
        .arg(&series)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let chart = fs::read_to_string(&out)?;
    assert!(chart.contains("о │"));
    assert!(chart.contains(" 10"));
    assert!(!chart.contains('\u{1b}'));
    Ok(())
}

#[test]
fn test_chart_rejects_mismatched_series() {
    letterstat()
        .args(["chart", "--labels", "a,b", "--values", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Got 2 labels but 1 values"));
}

#[test]
fn test_redundancy_from_bounds() -> Result<()> {
    let output = letterstat()
        .args(["redundancy", "--estimate", "H10=3.196:3.555", "--estimate", "H30=1.5:2.5"])
        .output()?;

    assert!(output.status.success());
    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("H10"));
    // (3.196 + 3.555) / 2 = 3.3755, 1 - 3.3755 / 5 = 0.3249
    assert!(stdout.contains("3.3755"));
    assert!(stdout.contains("0.3249"));
    // 1 - 2 / 5
    assert!(stdout.contains("0.6000"));
    Ok(())
}

#[test]
fn test_redundancy_rejects_malformed_estimate() {
    letterstat()
        .args(["redundancy", "--estimate", "H10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME=LOW:HIGH"));
}

#[test]
fn test_custom_theme_file() -> Result<()> {
    let mut theme = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    writeln!(theme, "chart_bar:\n  fg: magenta")?;

    letterstat()
        .arg("--theme")
        .arg(theme.path())
        .args(["chart", "--labels", "x", "--values", "1"])
        .assert()
        .success();

    letterstat()
        .args(["--theme", "/no/such/theme.yaml", "chart", "--labels", "x", "--values", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Theme error"));
    Ok(())
}
