use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const CYCLOPROPENE: &str = r#"
[[atoms]]
id = "c1"
symbol = "C"

[[atoms]]
id = "c2"
symbol = "C"

[[atoms]]
id = "c3"
symbol = "C"

[[bonds]]
atoms = ["c1", "c2"]
order = "double"

[[bonds]]
atoms = ["c2", "c3"]

[[bonds]]
atoms = ["c3", "c1"]

[[rings]]
atoms = ["c1", "c2", "c3"]
"#;

fn structure_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn chemgraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chemgraph"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn inspect_prints_the_ring_summary() {
    let file = structure_file(CYCLOPROPENE);
    let output = chemgraph(&["inspect", "-i", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Atoms: 3, Bonds: 3, Lone pairs: 0"));
    assert!(stdout.contains("Ring 0: size 3, bond order sum 4, closed cycle: yes"));
}

#[test]
fn inspect_honors_the_backend_override() {
    let file = structure_file(CYCLOPROPENE);
    let output = chemgraph(&[
        "inspect",
        "-i",
        file.path().to_str().unwrap(),
        "--backend",
        "tracing",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Backend: tracing"));
}

#[test]
fn walk_prints_one_line_per_ring_bond() {
    let file = structure_file(CYCLOPROPENE);
    let output = chemgraph(&["walk", "-i", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].trim_start().starts_with("1. Bond(Double"));
    assert!(lines[2].trim_start().starts_with("3. Bond(Single"));
}

#[test]
fn invalid_ring_index_fails_with_an_error() {
    let file = structure_file(CYCLOPROPENE);
    let output = chemgraph(&["walk", "-i", file.path().to_str().unwrap(), "--ring", "3"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Ring index 3 is out of range"));
}

#[test]
fn malformed_structure_file_is_reported() {
    let file = structure_file("[[atoms]]\nid = \"c1\"\nmass = 12.0\n");
    let output = chemgraph(&["inspect", "-i", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to parse file"));
}
