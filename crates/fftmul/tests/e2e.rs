//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fftmul() -> Command {
    Command::cargo_bin("fftmul").expect("binary not found")
}

#[test]
fn help_flag() {
    fftmul()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("FFT"));
}

#[test]
fn version_flag() {
    fftmul()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fftmul"));
}

#[test]
fn positional_operands() {
    fftmul()
        .args(["7", "8"])
        .assert()
        .success()
        .stdout("56\n");
}

#[test]
fn scenario_nine_digit_operands() {
    fftmul()
        .args(["123456789", "987654321", "-q"])
        .assert()
        .success()
        .stdout("121932631112635269\n");
}

#[test]
fn stdin_operands() {
    fftmul()
        .write_stdin("999\n999\n")
        .assert()
        .success()
        .stdout("998001\n");
}

#[test]
fn stdin_leading_zeros_skipped() {
    fftmul()
        .write_stdin("0001000\n1000\n")
        .assert()
        .success()
        .stdout("1000000\n");
}

#[test]
fn zero_operand() {
    fftmul()
        .args(["0", "123456789"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn empty_line_operand_renders_zero() {
    fftmul()
        .write_stdin("\n42\n")
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn input_and_output_files() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("in.txt");
    let output = tmp.path().join("out.txt");
    std::fs::write(&input, "31415926535\n27182818284\n").unwrap();
    fftmul()
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-q",
        ])
        .assert()
        .success()
        .stdout("");
    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "853973422224398765940\n");
}

#[test]
fn missing_input_file() {
    fftmul()
        .args(["-i", "/nonexistent/fftmul/input.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn invalid_digit() {
    fftmul()
        .args(["12x4", "5"])
        .assert()
        .code(65)
        .stderr(predicate::str::contains("invalid digit 'x'"));
}

#[test]
fn missing_second_operand_on_stdin() {
    fftmul().write_stdin("42\n").assert().code(65);
}

#[test]
fn single_positional_operand() {
    fftmul().arg("42").assert().code(65);
}

#[test]
fn tolerance_out_of_range() {
    fftmul()
        .args(["--tolerance", "1.5", "2", "3"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("tolerance"));
}

#[test]
fn tolerance_from_env() {
    fftmul()
        .env("FFTMUL_TOLERANCE", "0.2")
        .args(["12", "12"])
        .assert()
        .success()
        .stdout("144\n");
}

#[test]
fn details_mode() {
    fftmul()
        .args(["123456789", "987654321", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("32 points"))
        .stdout(predicate::str::contains("121932631112635269"));
}

#[test]
fn long_product_truncated_unless_verbose() {
    let a = "9".repeat(80);
    fftmul()
        .args([a.as_str(), a.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(160 digits)"));
    fftmul()
        .args([a.as_str(), a.as_str(), "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("...").not());
}

#[test]
fn json_report() {
    let out = fftmul()
        .args(["999", "999", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["product"], "998001");
    assert_eq!(report["transform_len"], 8);
    assert_eq!(report["operand_digits"][0], 3);
}

#[test]
fn shell_completion_bash() {
    fftmul()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fftmul"));
}

#[test]
fn shell_completion_zsh() {
    fftmul()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fftmul"));
}

#[test]
fn output_file_keeps_stdout_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = tmp.path().join("out.txt");
    fftmul()
        .args(["999", "999", "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "998001\n");
}

#[test]
fn output_file_with_json_report() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = tmp.path().join("out.txt");
    let out = fftmul()
        .args(["7", "8", "--json", "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["product"], "56");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "56\n");
}

#[test]
fn json_error_on_stderr() {
    let err = fftmul()
        .args(["--json", "12x4", "5"])
        .assert()
        .code(65)
        .stdout("")
        .get_output()
        .stderr
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&err).unwrap();
    assert!(value["error"]
        .as_str()
        .unwrap()
        .contains("invalid digit 'x' at position 2"));
}

#[test]
fn text_error_has_prefix() {
    fftmul()
        .args(["12", "3-4"])
        .assert()
        .code(65)
        .stderr(predicate::str::starts_with("Error: invalid digit '-'"));
}
