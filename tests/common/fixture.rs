use rstest::fixture;

#[fixture]
pub fn linear_history() -> String {
    [
        "c3\tc2\tAlice\t2024-03-03T12:00:00+00:00\tHEAD -> main\tThird commit",
        "c2\tc1\tBob\t2024-03-02T12:00:00+00:00\t\tSecond commit",
        "c1\t\tAlice\t2024-03-01T12:00:00+00:00\t\tInitial commit",
    ]
    .join("\n")
}

#[fixture]
pub fn merge_history() -> String {
    [
        "m\ta2 f1\tAlice\t2024-03-04T12:00:00+00:00\tHEAD -> main\tMerge branch 'feature'",
        "f1\ta1\tBob\t2024-03-03T12:00:00+00:00\tfeature\tAdd feature",
        "a2\ta1\tAlice\t2024-03-02T12:00:00+00:00\t\tFix typo",
        "a1\t\tAlice\t2024-03-01T12:00:00+00:00\ttag: v1\tInitial commit",
    ]
    .join("\n")
}

#[fixture]
pub fn two_file_diff() -> String {
    r"diff --git a/src/main.rs b/src/main.rs
index 3b18e51..a4c2d10 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,3 @@
 fn main() {
-    let x = 1;
+    let x = 2;
 }
@@ -10,2 +10,3 @@ fn helper() {
 fn helper() {
+    println!();
 }
diff --git a/notes.txt b/notes.txt
new file mode 100644
index 0000000..e69de29
--- /dev/null
+++ b/notes.txt
@@ -0,0 +1,2 @@
+first
+second
"
    .to_string()
}
