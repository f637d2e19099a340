//! Runs of the `femtic2xyz` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const MESH: &str = "../mesh/data/two_elements.dat";
const BLOCKS: &str = "../resistivity/data/resistivity_block_iter3.dat";

fn femtic2xyz(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_femtic2xyz"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("binary should run")
}

fn run_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::copy(MESH, dir.path().join("mesh.dat")).unwrap();
    fs::copy(BLOCKS, dir.path().join("resistivity_block_iter3.dat")).unwrap();
    fs::write(dir.path().join("params.txt"), "3\n1.0 2.0 0.0\n1\n0\n").unwrap();
    dir
}

#[test]
fn converts_working_directory() {
    let dir = run_dir();
    let output = femtic2xyz(dir.path(), &["-q", "params.txt"]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let text = fs::read_to_string(dir.path().join("resistivity_xyz_iter3.dat")).unwrap();
    assert_eq!(text.lines().next(), Some("2"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn exclusions_are_opt_in() {
    let dir = run_dir();
    let output = femtic2xyz(dir.path(), &["-q", "--apply-exclusions", "params.txt"]);
    assert!(output.status.success());

    let text = fs::read_to_string(dir.path().join("resistivity_xyz_iter3.dat")).unwrap();
    assert_eq!(text.lines().next(), Some("1"));
    assert!(text.lines().nth(1).unwrap().ends_with("              1"));
}

#[test]
fn missing_argument_fails() {
    let dir = TempDir::new().unwrap();
    let output = femtic2xyz(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn missing_parameter_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = femtic2xyz(dir.path(), &["absent.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: file open error: absent.txt"), "stderr: {stderr}");
    assert_eq!(stderr.trim_end().lines().count(), 1, "stderr: {stderr}");
}

#[test]
fn missing_mesh_fails_without_output() {
    let dir = run_dir();
    fs::remove_file(dir.path().join("mesh.dat")).unwrap();
    let output = femtic2xyz(dir.path(), &["-q", "params.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("mesh.dat"));
    assert!(!dir.path().join("resistivity_xyz_iter3.dat").exists());
}

#[test]
fn help_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = femtic2xyz(dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--apply-exclusions"));
}
