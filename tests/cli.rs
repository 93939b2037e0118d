use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::predicate;
use tempfile::TempDir;

#[test]
fn test_cli_no_args_prints_usage() {
    let mut cmd = cargo_bin_cmd!("asciibin");
    cmd.assert()
        .success()
        .stdout("Please provide a file name as an argument.\n");
}

#[test]
fn test_cli_missing_file_exits_zero() {
    let mut cmd = cargo_bin_cmd!("asciibin");
    cmd.arg("does-not-exist.bin")
        .assert()
        .success()
        .stdout("File does-not-exist.bin not found.\n");
}

#[test]
fn test_cli_binary_then_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.bin");
    std::fs::write(&path, [0x41]).unwrap();

    let mut cmd = cargo_bin_cmd!("asciibin");
    cmd.arg(&path)
        .arg("missing.bin")
        .assert()
        .success()
        .stdout(format!(
            "Binary content of {}:\n01000001\nFile missing.bin not found.\n",
            path.display()
        ));
}

#[test]
fn test_cli_text_mode() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hi.txt");
    std::fs::write(&path, "Hi").unwrap();

    let mut cmd = cargo_bin_cmd!("asciibin");
    cmd.args(["--mode", "text"])
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("Binary content of {}: 0100100001101001\n", path.display()));
}

#[test]
fn test_cli_text_mode_invalid_utf8_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, [0xFF, 0xFE]).unwrap();

    let mut cmd = cargo_bin_cmd!("asciibin");
    cmd.args(["-m", "text"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid UTF-8 text"));
}

#[test]
fn test_cli_unknown_mode_is_usage_error() {
    let mut cmd = cargo_bin_cmd!("asciibin");
    cmd.args(["--mode", "hex", "a.bin"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
