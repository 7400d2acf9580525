use crate::common::command::{run_histview, stdout_json, workdir, write_input};
use crate::common::fixture::linear_history;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_linear_history_on_a_single_lane(
    workdir: TempDir,
    linear_history: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let history = write_input(&workdir, "history.txt", &linear_history);

    run_histview(&["graph", history.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("* c3 Third commit"))
        .stdout(predicate::str::contains("* c2 Second commit"))
        .stdout(predicate::str::contains("* c1 Initial commit"));

    let rows = stdout_json(&mut run_histview(&[
        "graph",
        "--format",
        "json",
        history.to_str().unwrap(),
    ]))?;
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row["lane"] == 0 && row["max_lane_so_far"] == 0));

    Ok(())
}

#[rstest]
fn read_history_from_stdin(linear_history: String) {
    run_histview(&["graph", "--abbrev-commit"])
        .write_stdin(linear_history)
        .assert()
        .success()
        .stdout(predicate::str::contains("* c3 Third commit"));
}

#[rstest]
fn show_empty_history() {
    run_histview(&["graph"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
