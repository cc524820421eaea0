use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn bin_path() -> PathBuf {
    // Cargo exposes built binary path for tests via this env var
    PathBuf::from(env!("CARGO_BIN_EXE_yaso-bench"))
}

fn yaso_bench() -> Command {
    let mut cmd = Command::new(bin_path());
    cmd.env_remove("YASO_BENCH_TRACE");
    cmd
}

fn elapsed_values(stdout: &str, suffix: &str) -> Vec<f64> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Took ")?.strip_suffix(suffix))
        .map(|ms| ms.parse().expect("elapsed should be a float"))
        .collect()
}

#[test]
fn test_run_path_suite_prints_each_benchmark() {
    let output = yaso_bench().arg("path").output().expect("spawn yaso-bench");
    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Running path.parse('/usr/bin/yaso') of path benchmarks..");
    assert_eq!(lines[2], "");
    assert_eq!(lines.len(), 9 * 3 + 2);

    let per_entry = elapsed_values(&stdout, "ms to run the benchmark");
    assert_eq!(per_entry.len(), 9);
    assert!(per_entry.iter().all(|ms| *ms >= 0.0));

    let total = elapsed_values(&stdout, "ms to run all benchmarks");
    assert_eq!(total.len(), 1);
    assert!(total[0] >= per_entry.iter().sum::<f64>());
}

#[test]
fn test_suites_run_in_argument_order() {
    let output = yaso_bench()
        .args(["process", "events"])
        .output()
        .expect("spawn yaso-bench");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let running: Vec<&str> = stdout.lines().filter(|l| l.starts_with("Running ")).collect();
    assert_eq!(running.len(), 3 + 9);
    assert_eq!(running[0], "Running process.cwd() of process benchmarks..");
    assert_eq!(running[3], "Running emitter.emit('dummy') * 1 of events benchmarks..");
    assert_eq!(running[11], "Running emitter.emit('dummy') * 1000 of events benchmarks..");
}

#[test]
fn test_list_does_not_run() {
    yaso_bench()
        .args(["--list", "process"])
        .assert()
        .success()
        .stdout("process\tprocess.cwd()\nprocess\tprocess.hrtime()\nprocess\tprocess.hrtime.bigint()\n");
}

#[test]
fn test_list_all_suites() {
    let output = yaso_bench().arg("--list").output().expect("spawn yaso-bench");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 9 + 5 + 9 + 3);
    assert!(stdout.lines().next().unwrap_or_default().starts_with("events\t"));
}

#[test]
fn test_unknown_suite_fails() {
    yaso_bench()
        .arg("fs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown suite 'fs'"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_process_suite_runs_from_temp_dir() {
    let dir = tempfile::tempdir().expect("create temp dir");
    yaso_bench()
        .current_dir(dir.path())
        .arg("process")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Running process.cwd() of process benchmarks..")
                .and(predicate::str::contains("ms to run all benchmarks")),
        );
}

#[test]
fn test_trace_logs_go_to_stderr() {
    let output = yaso_bench()
        .env("YASO_BENCH_TRACE", "yaso::bench=debug")
        .arg("process")
        .output()
        .expect("spawn yaso-bench");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("batch finished"), "stderr: {}", stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("batch finished"));
}

#[test]
fn test_default_trace_filter_logs_cli_and_process() {
    let output = yaso_bench()
        .env("YASO_BENCH_TRACE", "1")
        .env_remove("RUST_LOG")
        .arg("--list")
        .arg("process")
        .output()
        .expect("spawn yaso-bench");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hrtime clock started"), "stderr: {}", stderr);
    assert!(stderr.contains("benchmarks registered"), "stderr: {}", stderr);
}

#[test]
fn test_os_trace_reports_uname_version() {
    let output = yaso_bench()
        .env("YASO_BENCH_TRACE", "yaso::os=trace")
        .arg("os")
        .output()
        .expect("spawn yaso-bench");
    assert!(output.status.success());
    if cfg!(unix) {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("uname"), "stderr: {}", stderr);
    }
}
