/*!
 * End-to-end integration test for the accumulation pipeline
 */

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use indicatif::ProgressBar;
use tempfile::tempdir;

use accumulate::{Accumulator, Config, ExtensionSet, FILE_SEPARATOR};

fn write_file(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut file = File::create(path).unwrap();
    file.write_all(contents).unwrap();
}

fn run(working_dir: &Path, dirs: &[&str], extensions: &str, max_size_kb: u64) -> (String, Config) {
    let config = Config::new(
        working_dir.to_path_buf(),
        dirs.iter().map(|d| d.to_string()).collect(),
        ExtensionSet::parse(extensions).unwrap(),
        max_size_kb,
        "accumulated_files.txt",
    );
    config.validate().unwrap();

    let accumulator = Accumulator::new(config.clone(), ProgressBar::hidden());
    accumulator.run().unwrap();

    let output = fs::read_to_string(&config.output_file).unwrap();
    (output, config)
}

#[test]
fn test_full_pipeline() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_file(root, "app/main.ts", b"export const x = 1;\n");
    write_file(root, "app/lib/util.ts", b"export const y = 2;\n");
    write_file(root, "app/readme.md", b"# readme\n");
    write_file(root, "app/node_modules/dep/index.ts", b"module.exports = {};\n");
    write_file(root, "assets/logo.ts", b"export const logo = 0;\n");

    let (output, _) = run(root, &["app", "assets"], "ts", 0);

    // Matching files are present, each with a header and a separator
    assert!(output.contains("// File: app/main.ts (20 bytes)\n"));
    assert!(output.contains("// File: app/lib/util.ts (20 bytes)\n"));
    assert!(output.contains("// File: assets/logo.ts (23 bytes)\n"));
    assert!(output.contains("export const x = 1;"));
    assert_eq!(output.matches(FILE_SEPARATOR).count(), 3);

    // The selection order is respected across directories
    let app_pos = output.find("// File: app/main.ts").unwrap();
    let assets_pos = output.find("// File: assets/logo.ts").unwrap();
    assert!(app_pos < assets_pos);

    // Filtered and pruned files never appear
    assert!(!output.contains("readme.md"));
    assert!(!output.contains("node_modules"));
}

#[test]
fn test_rerun_does_not_ingest_previous_artifact() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_file(root, "src/code.rs", b"fn f() {}\n");

    let (first, config) = run(root, &["."], "*", 0);
    assert!(first.contains("// File: ./src/code.rs (10 bytes)\n"));

    // Second run over the same tree, with the first artifact still on disk
    let (second, _) = run(root, &["."], "*", 0);

    assert_eq!(first, second);
    assert!(!second.contains(&format!(
        "// File: ./{}",
        config.output_file.file_name().unwrap().to_string_lossy()
    )));
    // The artifact's own header lines were not doubled into the new output
    assert_eq!(second.matches("// File: ").count(), 1);
}

#[test]
fn test_artifact_is_byte_exact() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    let body = b"line one\nline two\n";
    write_file(root, "only/file.txt", body);

    let (output, _) = run(root, &["only"], "*", 0);

    let mut expected = String::from("// File: only/file.txt (18 bytes)\n");
    expected.push_str(std::str::from_utf8(body).unwrap());
    expected.push_str(FILE_SEPARATOR);
    assert_eq!(output, expected);
}
