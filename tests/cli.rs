//! End-to-end tests for the `subshift` binary.
#![allow(deprecated)] // assert_cmd::Command::cargo_bin

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_SRT: &str = "1
00:00:10,500 --> 00:00:12,000
Hello there.

2
00:00:01,000 --> 00:00:02,000
General Kenobi.
";

fn subshift(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("subshift").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn shifts_file_to_derived_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("clip.srt"), SAMPLE_SRT).unwrap();

    subshift(&dir)
        .args(["--file", "clip.srt", "--time", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clip_rsynced.srt"))
        .stdout(predicate::str::contains("2.5"));

    let out = fs::read_to_string(dir.path().join("clip_rsynced.srt")).unwrap();
    assert_eq!(
        out,
        "1
00:00:13,000 --> 00:00:14,500
Hello there.

2
00:00:03,500 --> 00:00:04,500
General Kenobi.
"
    );
}

#[test]
fn negative_shift_clamps_to_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.srt"), SAMPLE_SRT).unwrap();

    subshift(&dir)
        .args(["-f", "in.srt", "-t", "-5", "-o", "out.srt"])
        .assert()
        .success();

    let out = fs::read_to_string(dir.path().join("out.srt")).unwrap();
    assert!(out.contains("00:00:05,500 --> 00:00:07,000\n"));
    assert!(out.contains("00:00:00,000 --> 00:00:00,000\n"));
}

#[test]
fn input_without_extension_gets_suffix_appended() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("subs"), SAMPLE_SRT).unwrap();

    subshift(&dir).args(["-f", "subs", "-t", "1"]).assert().success();

    assert!(dir.path().join("subs_rsynced").exists());
}

#[test]
fn passthrough_lines_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let mut input = b"1\r\n00:00:01,000\r\n".to_vec();
    input.extend_from_slice(&[0xc7, 0x61, 0x6c, 0xfd, 0xfe, b'\r', b'\n']);
    input.extend_from_slice(b"last line without newline");
    fs::write(dir.path().join("odd.srt"), &input).unwrap();

    subshift(&dir)
        .args(["-f", "odd.srt", "-t", "3"])
        .assert()
        .success();

    assert_eq!(fs::read(dir.path().join("odd_rsynced.srt")).unwrap(), input);
}

#[test]
fn missing_time_means_zero_shift() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.srt"), "0:0:5,7 --> 0:0:6,80\n").unwrap();

    subshift(&dir).args(["-f", "a.srt"]).assert().success();

    let out = fs::read_to_string(dir.path().join("a_rsynced.srt")).unwrap();
    assert_eq!(out, "00:00:05,007 --> 00:00:06,080\n");
}

#[test]
fn non_numeric_time_defaults_to_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.srt"), "00:00:05,000 --> 00:00:06,000\n").unwrap();

    subshift(&dir)
        .args(["-f", "a.srt", "-t", "soon"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a number"));

    let out = fs::read_to_string(dir.path().join("a_rsynced.srt")).unwrap();
    assert_eq!(out, "00:00:05,000 --> 00:00:06,000\n");
}

#[test]
fn strict_time_config_rejects_non_numeric_time() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.srt"), "1\n").unwrap();
    fs::write(dir.path().join("strict.toml"), "[shift]\nstrict_time = true\n").unwrap();

    subshift(&dir)
        .args(["--config", "strict.toml", "-f", "a.srt", "-t", "soon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid --time value"));

    assert!(!dir.path().join("a_rsynced.srt").exists());
}

#[test]
fn missing_file_flag_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    subshift(&dir)
        .args(["-t", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    subshift(&dir)
        .args(["-f", "a.srt", "--speed", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_input_exits_with_one() {
    let dir = TempDir::new().unwrap();
    subshift(&dir)
        .args(["-f", "missing.srt", "-t", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open input file"));
}

#[test]
fn unwritable_output_exits_with_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.srt"), "1\n").unwrap();

    subshift(&dir)
        .args(["-f", "a.srt", "-o", "no/such/dir/out.srt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open output file"));
}

#[test]
fn help_exits_with_zero() {
    let dir = TempDir::new().unwrap();
    subshift(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--time"));
}

#[test]
fn vtt_format_is_inferred_from_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("talk.vtt"),
        "WEBVTT\n\n00:01.000 --> 00:02.500 line:0\nHi\n",
    )
    .unwrap();

    subshift(&dir).args(["-f", "talk.vtt", "-t", "0.5"]).assert().success();

    let out = fs::read_to_string(dir.path().join("talk_rsynced.vtt")).unwrap();
    assert_eq!(out, "WEBVTT\n\n00:00:01.500 --> 00:00:03.000 line:0\nHi\n");
}

#[test]
fn ass_events_are_shifted() {
    let dir = TempDir::new().unwrap();
    let input = "[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.50,0:00:03.00,Default,,0000,0000,0000,,Merhaba, dünya
";
    fs::write(dir.path().join("show.ass"), input).unwrap();

    subshift(&dir).args(["-f", "show.ass", "-t", "-1"]).assert().success();

    let out = fs::read_to_string(dir.path().join("show_rsynced.ass")).unwrap();
    assert!(out.ends_with("Dialogue: 0,0:00:00.50,0:00:02.00,Default,,0000,0000,0000,,Merhaba, dünya\n"));
    assert!(out.starts_with("[Events]\nFormat: Layer, Start, End,"));
}

#[test]
fn print_default_config_needs_no_file() {
    let dir = TempDir::new().unwrap();
    subshift(&dir)
        .arg("--print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("output_suffix = \"_rsynced\""));
}
