use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RECORD: &str = "projectfiles.md5.tmp";

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("projectfiles-check").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn exit_codes_follow_changes() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "a/CMakeLists.txt", "X");
    write(dir, "b/lib.pro", "Y");

    // md5("XY")
    let xy = "74c53bcd3dcb2bb79993b2fec37d362a";

    cmd(dir).assert().code(1).stdout(predicate::str::contains("changed"));
    assert_eq!(fs::read_to_string(dir.join(RECORD)).unwrap().trim(), xy);

    cmd(dir)
        .arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("unchanged"));

    write(dir, "b/lib.pro", "Z");
    cmd(dir).arg("--quiet").assert().code(1).stdout(predicate::str::is_empty());
    assert_ne!(fs::read_to_string(dir.join(RECORD)).unwrap().trim(), xy);
}

#[test]
fn hash_prints_digest_without_record() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "docs/CMakeLists.txt", "ignored");

    cmd(dir)
        .arg("hash")
        .assert()
        .success()
        .stdout("d41d8cd98f00b204e9800998ecf8427e\n");
    assert!(!dir.join(RECORD).exists());
}

#[test]
fn list_shows_hash_order() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "a/y.pro", "");
    write(dir, "a.b/x.pro", "");
    write(dir, "a/notes.pro.txt", "");
    write(dir, ".git/CMakeLists.txt", "");

    let output = cmd(dir).arg("list").assert().success().get_output().stdout.clone();
    let listed: Vec<String> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| l.replace('\\', "/"))
        .collect();
    assert_eq!(listed, vec!["a.b/x.pro", "a/y.pro"]);
}

#[test]
fn invalid_utf8_fails_with_distinct_status() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("CMakeLists.txt"), [0xffu8, 0xfe]).unwrap();

    cmd(dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("CMakeLists.txt"));
    assert!(!dir.join(RECORD).exists());
}

#[test]
fn missing_root_fails() {
    let temp_dir = TempDir::new().unwrap();

    cmd(temp_dir.path())
        .args(["check", "does-not-exist"])
        .assert()
        .code(2);
}

#[test]
fn custom_record_and_clean() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "Info.plist", "<plist/>");

    cmd(dir).args(["check", "--record", "fp.txt"]).assert().code(1);
    assert!(dir.join("fp.txt").exists());
    assert!(!dir.join(RECORD).exists());

    cmd(dir)
        .args(["clean", "--record", "fp.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed record"));
    assert!(!dir.join("fp.txt").exists());

    cmd(dir).args(["check", "--record", "fp.txt"]).assert().code(1);
}

#[test]
fn init_writes_config_that_is_honoured() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    cmd(dir).arg("init").assert().success();
    let config_path = dir.join("projectfiles-check.toml");
    assert!(config_path.exists());

    cmd(dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let config = fs::read_to_string(&config_path)
        .unwrap()
        .replace("projectfiles.md5.tmp", "state/fingerprint");
    fs::write(&config_path, config).unwrap();
    fs::create_dir_all(dir.join("state")).unwrap();

    cmd(dir).assert().code(1);
    assert!(dir.join("state/fingerprint").exists());
    cmd(dir).assert().code(0);
}
