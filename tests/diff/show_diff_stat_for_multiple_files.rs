use crate::common::command::{run_histview, stdout_json};
use crate::common::fixture::two_file_diff;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_diff_stat_for_multiple_files(
    two_file_diff: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_histview(&["diff", "--stat"])
        .write_stdin(two_file_diff)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        String::from_utf8(output)?,
        [
            " src/main.rs |     3 ++-",
            " notes.txt   |     2 ++",
            " 2 files changed, 4 insertions(+), 1 deletion(-)",
            "",
        ]
        .join("\n")
    );

    Ok(())
}

#[rstest]
fn show_diff_stat_as_json(two_file_diff: String) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = run_histview(&["diff", "--stat", "--format", "json"]);
    cmd.write_stdin(two_file_diff);
    let stats = stdout_json(&mut cmd)?;

    assert_eq!(stats["files_changed"], 2);
    assert_eq!(stats["additions"], 4);
    assert_eq!(stats["deletions"], 1);

    Ok(())
}

#[test]
fn show_binary_file_in_diff_stat() {
    let raw = "diff --git a/logo.png b/logo.png\nindex 1234567..89abcde 100644\nBinary files a/logo.png and b/logo.png differ\n";

    run_histview(&["diff", "--stat"])
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(predicates::str::contains(" logo.png |   Bin"));
}
