use crate::common::command::{run_histview, stdout_json};
use crate::common::fixture::two_file_diff;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

#[rstest]
fn show_split_diff_side_by_side(two_file_diff: String) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_histview(&["diff", "--split", "--column-width", "20"])
        .write_stdin(two_file_diff)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    let paired = format!(
        "{} {:<20} │ {} {:<20}",
        "   2", "    let x = 1;", "   2", "    let x = 2;"
    );
    let added_only = format!(
        "{} {:<20} │ {} {:<20}",
        "    ", "", "  11", "    println!();"
    );

    assert!(output.lines().any(|line| line == paired));
    assert!(output.lines().any(|line| line == added_only));

    Ok(())
}

#[rstest]
fn show_split_rows_as_json(two_file_diff: String) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = run_histview(&["diff", "--split", "--format", "json"]);
    cmd.write_stdin(two_file_diff);
    let files = stdout_json(&mut cmd)?;

    let rows = files[0]["hunks"][0]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["left"], rows[0]["right"]);
    assert_eq!(rows[1]["left"]["content"], "    let x = 1;");
    assert_eq!(rows[1]["right"]["content"], "    let x = 2;");

    let second = files[0]["hunks"][1]["rows"].as_array().unwrap();
    assert_eq!(second[1]["left"], Value::Null);
    assert_eq!(second[1]["right"]["new_line_no"], 11);

    assert_eq!(files[1]["status"], "Added");

    Ok(())
}

#[test]
fn split_pairs_two_deletions_with_three_additions() -> Result<(), Box<dyn std::error::Error>> {
    let raw = "diff --git a/f b/f\n@@ -1,2 +1,3 @@\n-a\n-b\n+x\n+y\n+z\n";
    let mut cmd = run_histview(&["diff", "--split", "--format", "json"]);
    cmd.write_stdin(raw);
    let files = stdout_json(&mut cmd)?;

    let rows = files[0]["hunks"][0]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(!rows[0]["left"].is_null() && !rows[0]["right"].is_null());
    assert!(!rows[1]["left"].is_null() && !rows[1]["right"].is_null());
    assert!(rows[2]["left"].is_null());
    assert_eq!(rows[2]["right"]["content"], "z");

    Ok(())
}
