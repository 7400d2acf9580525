use crate::common::command::{run_histview, workdir, write_input};
use crate::common::fixture::two_file_diff;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_diff_with_line_numbers_for_each_change(
    workdir: TempDir,
    two_file_diff: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let diff = write_input(&workdir, "changes.diff", &two_file_diff);

    let output = run_histview(&["diff", diff.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    assert!(output.contains("Modified   src/main.rs"));
    assert!(output.contains("@@ -1,3 +1,3 @@"));
    assert!(output.contains("   1    1  fn main() {"));
    assert!(output.contains("   2      -    let x = 1;"));
    assert!(output.contains("        2 +    let x = 2;"));
    assert!(output.contains("@@ -10,2 +10,3 @@ fn helper() {"));
    assert!(output.contains("       11 +    println!();"));
    assert!(output.contains("Added      notes.txt"));
    assert!(output.contains("        1 +first"));
    assert!(output.ends_with(" 2 files changed, 4 insertions(+), 1 deletion(-)\n"));

    Ok(())
}

#[test]
fn show_diff_for_empty_input() {
    run_histview(&["diff"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            " 0 files changed, 0 insertions(+), 0 deletions(-)\n",
        ));
}

#[test]
fn show_diff_skipping_malformed_hunk() {
    let raw = "diff --git a/f b/f\n@@ nonsense @@\n+lost\n@@ -1 +1 @@\n-old\n+new\n";

    run_histview(&["diff"])
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(predicate::str::contains("+lost").not())
        .stdout(predicate::str::contains(
            " 1 file changed, 1 insertion(+), 1 deletion(-)",
        ));
}
