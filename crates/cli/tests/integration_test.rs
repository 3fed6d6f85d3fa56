use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn wcount() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wcount"))
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn row(lines: u64, words: u64, bytes: u64, label: &str) -> String {
    format!("{lines:>8}{words:>8}{bytes:>8} {label}\n")
}

#[test]
fn shows_help() {
    wcount()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wcount"));
}

#[test]
fn stdin_without_arguments() {
    wcount()
        .write_stdin("Hello, world!")
        .assert()
        .success()
        .stdout("       1       2      13\n")
        .stderr("");
}

#[test]
fn two_files_print_a_total() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "a\nb\n");
    let c = write(&dir, "c.txt", "c\n");

    let expected = [row(2, 2, 4, &a), row(1, 1, 2, &c), row(3, 3, 6, "total")].concat();
    wcount().args([&a, &c]).assert().success().stdout(expected);
}

#[test]
fn single_file_has_no_total() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "one two\nthree");

    wcount()
        .arg(&a)
        .assert()
        .success()
        .stdout(row(2, 3, 13, &a))
        .stdout(predicate::str::contains("total").not());
}

#[test]
fn missing_file_is_reported_and_excluded() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt").display().to_string();
    let ok = write(&dir, "ok.txt", "Hello, world!");

    let expected = [row(1, 2, 13, &ok), row(1, 2, 13, "total")].concat();
    wcount()
        .args([&missing, &ok])
        .assert()
        .failure()
        .code(1)
        .stdout(expected)
        .stderr(format!("wcount: {missing}: No such file or directory\n"));
}

#[test]
fn directory_fails_at_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().display().to_string();

    wcount()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::starts_with(format!("wcount: {path}: ")))
        .stderr(predicate::str::contains("directory"));
}

#[test]
fn selected_metrics_only() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "a  b\n");

    wcount()
        .args(["-l", a.as_str()])
        .assert()
        .success()
        .stdout(format!("{:>8} {a}\n", 1));

    wcount()
        .args(["-wc", a.as_str()])
        .assert()
        .success()
        .stdout(format!("{:>8}{:>8} {a}\n", 2, 5));
}

#[test]
fn dash_reads_stdin_between_files() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "x\n");

    let expected = format!(
        "{}{:>8}{:>8}{:>8}\n{}",
        row(1, 1, 2, &a),
        1,
        3,
        12,
        row(2, 4, 14, "total")
    );
    wcount()
        .args([a.as_str(), "-"])
        .write_stdin("from stdin y")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn repeated_dash_gives_stdin_to_the_first() {
    let expected = concat!(
        "       1       2      10\n",
        "       0       0       0\n",
        "       1       2      10 total\n",
    );
    for jobs in [None, Some("1")] {
        let mut cmd = wcount();
        if let Some(jobs) = jobs {
            cmd.args(["--jobs", jobs]);
        }
        cmd.args(["-", "-"])
            .write_stdin("only once\n")
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn output_follows_argument_order() {
    let dir = TempDir::new().unwrap();
    let big = "word ".repeat(200_000);
    let names: Vec<String> = (0..8)
        .map(|i| {
            let body = if i % 2 == 0 { big.as_str() } else { "tiny\n" };
            write(&dir, &format!("f{i}.txt"), body)
        })
        .collect();

    let output = wcount()
        .args(&names)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let labels: Vec<&str> = stdout
        .lines()
        .map(|l| l.rsplit(' ').next().unwrap())
        .collect();

    let mut expected: Vec<&str> = names.iter().map(String::as_str).collect();
    expected.push("total");
    assert_eq!(labels, expected);
}

#[test]
fn bounded_jobs_give_identical_output() {
    let dir = TempDir::new().unwrap();
    let files: Vec<String> = (0..5)
        .map(|i| write(&dir, &format!("{i}.txt"), &"line\n".repeat(i + 1)))
        .collect();

    let unbounded = wcount()
        .args(&files)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let pooled = wcount()
        .args(["--jobs", "2"])
        .args(&files)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(unbounded, pooled);
    assert!(
        String::from_utf8(pooled)
            .unwrap()
            .ends_with(&row(15, 15, 75, "total"))
    );
}

#[test]
fn small_buffer_counts_the_same() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "alpha beta\ngamma\n\ndelta");

    wcount()
        .args(["--buffer-size", "3", a.as_str()])
        .assert()
        .success()
        .stdout(row(4, 4, 23, &a));
}

#[test]
fn jsonl_format() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "a\nb\n");
    let c = write(&dir, "c.txt", "c\n");

    let output = wcount()
        .args(["--format", "jsonl", a.as_str(), c.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let records: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["label"], Value::from(a));
    assert_eq!(records[0]["bytes"], 4);
    assert_eq!(records[2]["type"], "total");
    assert_eq!(records[2]["lines"], 3);
    assert_eq!(records[2]["words"], 3);
    assert_eq!(records[2]["bytes"], 6);
}

#[test]
fn zero_buffer_size_is_rejected() {
    wcount()
        .args(["--buffer-size", "0", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("buffer size"));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let bytes = fs::metadata(&file).unwrap().len();

    wcount()
        .args(["-vv", "-c"])
        .arg(&file)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(format!("{bytes:>8} {}\n", file.display()))
        .stderr(predicate::str::contains("counted 1 of 1"));
}
