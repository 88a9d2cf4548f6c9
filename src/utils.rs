/*!
 * Utility functions for accumulate
 */

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::filter::is_pruned_dir;

/// Absolute form of a path, without touching the filesystem
pub fn absolutize(path: &Path, working_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

/// Deduplicate a directory list by resolved absolute path
///
/// First-occurrence order and the original spelling are preserved, so `.`
/// and an absolute spelling of the working directory collapse into one
/// traversal under the first name the user gave.
pub fn unique_directories(directories: &[PathBuf], working_dir: &Path) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for dir in directories {
        let absolute = absolutize(dir, working_dir);
        let resolved = absolute.canonicalize().unwrap_or(absolute);
        if seen.insert(resolved) {
            unique.push(dir.clone());
        }
    }

    unique
}

/// Count candidate files for progress tracking
///
/// Applies the same pruning rules as the accumulation walk; inaccessible
/// entries are simply not counted.
pub fn count_candidate_files(directories: &[PathBuf], working_dir: &Path) -> u64 {
    let mut count = 0;

    for dir in directories {
        let root = absolutize(dir, working_dir);
        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                !(e.file_type().is_dir() && is_pruned_dir(&e.file_name().to_string_lossy()))
            })
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_dir() {
                count += 1;
            }
        }
    }

    count
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
