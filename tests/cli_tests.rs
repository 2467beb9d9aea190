use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn rucat() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rucat"))
}

#[test]
fn test_no_arguments_concatenates_working_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::write(root.join("x.txt"), "hello").unwrap();
    fs::write(root.join("y.png"), [0x89, 0x50]).unwrap();

    let output = rucat()
        .current_dir(root)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run rucat");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Concatenation complete.\n");
    assert_eq!(
        fs::read_to_string(root.join("output_python.txt")).unwrap(),
        "hello\n"
    );
}

#[test]
fn test_missing_root_exits_non_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = rucat()
        .arg(temp_dir.path().join("does-not-exist"))
        .arg("--no-progress")
        .output()
        .expect("Failed to run rucat");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot access root directory"));
}
