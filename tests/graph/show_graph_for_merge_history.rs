use crate::common::command::{run_histview, stdout_json};
use crate::common::fixture::merge_history;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_merged_branch_in_second_lane(
    merge_history: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = run_histview(&["graph", "--format", "json"]);
    cmd.write_stdin(merge_history);
    let rows = stdout_json(&mut cmd)?;

    let lanes: Vec<(String, u64, u64)> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            (
                row["hash"].as_str().unwrap().to_string(),
                row["lane"].as_u64().unwrap(),
                row["max_lane_so_far"].as_u64().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        lanes,
        vec![
            ("m".to_string(), 0, 0),
            ("f1".to_string(), 1, 1),
            ("a2".to_string(), 0, 1),
            ("a1".to_string(), 1, 1),
        ]
    );

    Ok(())
}

#[rstest]
fn show_merge_history_as_text(merge_history: String) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_histview(&["graph"])
        .write_stdin(merge_history)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        vec![
            "*   m Merge branch 'feature'",
            "  * f1 Add feature",
            "*   a2 Fix typo",
            "  * a1 Initial commit",
        ]
    );

    Ok(())
}
