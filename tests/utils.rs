use std::fs;
use std::path::{Path, PathBuf};

/// Absolute path of a file or directory under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Absolute path of a directory under `tests/expected`.
pub fn expected(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/expected").join(name)
}

/// Prints differing files between an actual and an expected directory.
///
/// Only top-level files are compared; exports are flat.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {actual:?}");
    println!("Expected output: {expected:?}");

    let Ok(entries) = fs::read_dir(expected) else {
        println!("Cannot read expected directory");
        return;
    };
    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name();
        let expected_content = fs::read_to_string(entry.path()).unwrap_or_default();
        match fs::read_to_string(actual.join(&name)) {
            Ok(actual_content) if actual_content == expected_content => {}
            Ok(actual_content) => {
                println!("--- {name:?} differs ---");
                println!("expected:\n{expected_content}");
                println!("actual:\n{actual_content}");
            }
            Err(_) => println!("--- {name:?} missing from actual output ---"),
        }
    }
}
