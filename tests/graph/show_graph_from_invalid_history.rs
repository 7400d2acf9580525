use crate::common::command::run_histview;
use predicates::prelude::predicate;

#[test]
fn show_graph_from_history_with_invalid_date() {
    run_histview(&["graph"])
        .write_stdin("c2\tc1\tAlice\t2024-03-02T12:00:00+00:00\t\tok\nc1\t\tAlice\tlast tuesday\t\tbad\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("history line 2"));
}

#[test]
fn show_graph_from_missing_file() {
    run_histview(&["graph", "does/not/exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
