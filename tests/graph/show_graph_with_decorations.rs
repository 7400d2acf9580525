use crate::common::command::run_histview;
use crate::common::fixture::merge_history;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_refs_when_decorating(merge_history: String) {
    run_histview(&["graph", "--decorate"])
        .write_stdin(merge_history)
        .assert()
        .success()
        .stdout(predicate::str::contains("m (HEAD -> main) Merge branch 'feature'"))
        .stdout(predicate::str::contains("f1 (feature) Add feature"))
        .stdout(predicate::str::contains("a1 (tag: v1) Initial commit"));
}

#[rstest]
fn hide_refs_by_default(merge_history: String) {
    run_histview(&["graph"])
        .write_stdin(merge_history)
        .assert()
        .success()
        .stdout(predicate::str::contains("HEAD -> main").not());
}

#[test]
fn abbreviate_long_hashes() {
    run_histview(&["graph", "--abbrev-commit"])
        .write_stdin("0123456789abcdef0123456789abcdef01234567\t\tAlice\t\t\tRoot\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("* 0123456 Root"))
        .stdout(predicate::str::contains("0123456789abcdef").not());
}
