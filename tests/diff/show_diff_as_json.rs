use crate::common::command::{run_histview, stdout_json};
use crate::common::fixture::two_file_diff;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_diff_as_json(two_file_diff: String) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = run_histview(&["diff", "--format", "json"]);
    cmd.write_stdin(two_file_diff);
    let diff = stdout_json(&mut cmd)?;

    assert_eq!(diff["stats"]["files_changed"], 2);
    assert_eq!(diff["stats"]["additions"], 4);
    assert_eq!(diff["stats"]["deletions"], 1);

    let main = &diff["files"][0];
    assert_eq!(main["old_path"], "src/main.rs");
    assert_eq!(main["stats"]["additions"], 2);
    assert_eq!(main["hunks"][1]["section"], "fn helper() {");

    let change = &main["hunks"][0]["changes"][1];
    assert_eq!(change["kind"], "del");
    assert_eq!(change["content"], "    let x = 1;");
    assert_eq!(change["old_line_no"], 2);
    assert!(change["new_line_no"].is_null());

    let notes = &diff["files"][1];
    assert_eq!(notes["old_path"], "/dev/null");
    assert_eq!(notes["new_path"], "notes.txt");
    assert_eq!(notes["is_new"], true);
    assert_eq!(main["is_new"], false);

    Ok(())
}
