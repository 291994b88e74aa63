use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const BOX: &str = "+-----+\n| box |---> out\n+-----+\n";

#[test]
fn convert_to_listing_by_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.txt");
    fs::write(&path, BOX).unwrap();

    let mut cmd = cargo_bin_cmd!("asciigram");
    cmd.current_dir(dir.path()).arg(&path);

    cmd.assert().success().stdout(
        predicate::str::starts_with("⧉ diagram")
            .and(predicate::str::contains("¶ (2,1) \"box\""))
            .and(predicate::str::contains("end=arrow")),
    );
}

#[test]
fn convert_to_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.txt");
    fs::write(&path, BOX).unwrap();

    let mut cmd = cargo_bin_cmd!("asciigram");
    cmd.current_dir(dir.path()).arg(&path).arg("--format").arg("json");

    cmd.assert().success().stdout(
        predicate::str::contains("\"kind\": \"line\"")
            .and(predicate::str::contains("\"text\": \"out\"")),
    );
}

#[test]
fn config_file_sets_default_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.txt");
    let config = dir.path().join("settings.toml");
    fs::write(&path, BOX).unwrap();
    fs::write(&config, "[output]\nformat = \"yaml\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("asciigram");
    cmd.current_dir(dir.path())
        .arg(&path)
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kind: line"));
}

#[test]
fn write_output_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.txt");
    let output = dir.path().join("out").join("box.json");
    fs::write(&path, BOX).unwrap();

    let mut cmd = cargo_bin_cmd!("asciigram");
    cmd.current_dir(dir.path())
        .arg(&path)
        .args(["-f", "json", "-o"])
        .arg(&output);

    cmd.assert().success().stdout(predicate::str::is_empty());
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"figures\""));
}

#[test]
fn missing_file_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("asciigram");
    cmd.current_dir(dir.path()).arg(dir.path().join("missing.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn unknown_format_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("box.txt");
    fs::write(&path, BOX).unwrap();

    let mut cmd = cargo_bin_cmd!("asciigram");
    cmd.current_dir(dir.path()).arg(&path).args(["-f", "png"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format 'png'"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("asciigram");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("listing")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml")),
    );
}

#[test]
fn list_diagrams_in_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "--").unwrap();
    fs::write(dir.path().join("a.txt"), "||").unwrap();

    let mut cmd = cargo_bin_cmd!("asciigram");
    cmd.arg("--list").arg(dir.path());

    cmd.assert().success().stdout("a.txt\nb.txt\n");
}
