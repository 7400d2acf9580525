use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::PathBuf;

#[fixture]
pub fn workdir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// `histview` with colours and paging disabled
pub fn run_histview(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("histview").expect("Failed to find histview binary");
    cmd.args(["--color", "never", "--no-pager"]).args(args);
    cmd
}

pub fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file = dir.child(name);
    file.write_str(content).expect("Failed to write input file");
    file.path().to_path_buf()
}

pub fn stdout_json(cmd: &mut Command) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(serde_json::from_slice(&output)?)
}
