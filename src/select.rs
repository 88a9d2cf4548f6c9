/*!
 * Interactive selection boundary
 *
 * Wraps the dialoguer prompts: the directory multi-select, the extension
 * list and the size limit. Malformed input is re-prompted locally and never
 * escapes this module; an interrupt becomes a clean cancellation.
 */

use std::fs;
use std::io;
use std::path::Path;

use dialoguer::{Input, MultiSelect};

use crate::error::{AccumulateError, Result};
use crate::filter::ExtensionSet;

/// Map a prompt failure, turning an interrupt into a cancellation
fn prompt_error(err: dialoguer::Error) -> AccumulateError {
    match err {
        dialoguer::Error::IO(ref io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            AccumulateError::Cancelled
        }
        other => AccumulateError::Prompt(other),
    }
}

/// Discover candidate subdirectories of the working directory
///
/// Hidden directories are not offered; the picker always prepends `.`.
pub fn candidate_directories(working_dir: &Path) -> io::Result<Vec<String>> {
    let mut dirs = Vec::new();

    for entry in fs::read_dir(working_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        dirs.push(name);
    }

    dirs.sort();
    Ok(dirs)
}

/// Present the directory picker and return the confirmed selection
///
/// Returns the empty set when the user backs out without confirming.
pub fn select_directories(candidates: &[String]) -> Result<Vec<String>> {
    let mut items = Vec::with_capacity(candidates.len() + 1);
    items.push(".".to_string());
    items.extend(candidates.iter().cloned());

    let chosen = MultiSelect::new()
        .with_prompt("Select directories to process (space to toggle, enter to confirm)")
        .items(&items)
        .interact_opt()
        .map_err(prompt_error)?;

    match chosen {
        Some(indices) => Ok(indices.into_iter().map(|i| items[i].clone()).collect()),
        None => Ok(Vec::new()),
    }
}

/// Prompt for the extension list
///
/// Empty input is rejected and re-prompted; `*` selects every file.
pub fn prompt_extensions() -> Result<ExtensionSet> {
    let input: String = Input::new()
        .with_prompt("File extensions (comma-separated, e.g. ts,dart,json) or '*' for all files")
        .validate_with(|line: &String| -> std::result::Result<(), String> {
            if line.trim().is_empty() {
                Err("input cannot be empty - enter '*' for all files or specify extensions"
                    .to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_error)?;

    let extensions = ExtensionSet::parse(&input)?;
    if extensions.is_all() {
        println!("✓ Wildcard selected: all file types will be included");
    } else {
        println!("✓ Selected extensions: {}", extensions);
    }

    Ok(extensions)
}

/// Prompt for the size limit in KB; 0 means unlimited
///
/// Non-numeric and negative input never parse as `u64`, so dialoguer
/// re-prompts without this module seeing the bad value.
pub fn prompt_size_limit() -> Result<u64> {
    let size_kb = Input::<u64>::new()
        .with_prompt("Maximum file size to include in KB (0 = no limit)")
        .default(0)
        .interact_text()
        .map_err(prompt_error)?;

    if size_kb > 0 {
        println!("✓ Files larger than {} KB will be skipped", size_kb);
    } else {
        println!("✓ No size limit (all files will be included)");
    }

    Ok(size_kb)
}
