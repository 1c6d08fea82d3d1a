// Runs the compiled binary and checks what lands on stdout
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_memory-report"))
        .args(args)
        .output()
        .expect("failed to run memory-report")
}

#[test]
fn prints_report_on_stdout() {
    let output = run(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Memory stored successfully!").count(), 1);
    assert!(stdout.contains("\nTechnical Solution Metadata: {\n"));
    assert!(stdout.contains("\nApp State Metadata: {\n"));
}

#[test]
fn stdout_is_identical_across_runs() {
    let first = run(&[]);
    let second = run(&[]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn verbosity_only_affects_stderr() {
    let plain = run(&[]);
    let verbose = run(&["-vvv"]);
    let quiet = run(&["-q"]);

    assert_eq!(plain.stdout, verbose.stdout);
    assert_eq!(plain.stdout, quiet.stdout);

    let stderr = String::from_utf8(verbose.stderr).unwrap();
    assert!(stderr.contains("Rendered record: App State Metadata"));
    assert!(quiet.stderr.is_empty());
}

#[test]
fn app_state_block_parses() {
    let stdout = String::from_utf8(run(&[]).stdout).unwrap();
    let (_, json) = stdout
        .split_once("App State Metadata: ")
        .expect("app state block present");
    let value: serde_json::Value = serde_json::from_str(json.trim_end()).unwrap();

    assert_eq!(value["type"], "app_state_snapshot");
    assert_eq!(value["platform"], "web");
}
