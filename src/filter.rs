/*!
 * Include/exclude policy for accumulation runs
 *
 * All decisions are pure functions of the inputs: the same file attributes
 * always produce the same decision within one run.
 */

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use crate::error::Result;

/// Directory names that are never descended into
static PRUNE_DIRS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["node_modules", ".git", "vendor", "__pycache__"]));

/// Hidden file names that remain eligible for accumulation
static HIDDEN_ALLOWLIST: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from([".gitignore", ".env", ".env.example"]));

/// Check whether a directory name is on the prune denylist
pub fn is_pruned_dir(name: &str) -> bool {
    PRUNE_DIRS.contains(name)
}

/// Normalized set of file extensions to include
///
/// The empty set is a sentinel meaning "match all files", produced by the
/// `*` wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl ExtensionSet {
    /// The wildcard sentinel: every file matches
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a comma-separated extension list, or `*` for all files
    ///
    /// Tokens are trimmed, lower-cased and dot-prefixed; duplicates are
    /// dropped while preserving first-occurrence order. Input that is empty
    /// after trimming is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            crate::bail!(
                Config,
                "extension list cannot be empty - enter '*' for all files or specify extensions"
            );
        }
        if input == "*" {
            return Ok(Self::all());
        }

        let mut extensions = Vec::new();
        for token in input.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let mut ext = token.to_lowercase();
            if !ext.starts_with('.') {
                ext.insert(0, '.');
            }
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }

        Ok(Self { extensions })
    }

    /// Whether this is the match-everything sentinel
    pub fn is_all(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Whether a normalized extension is a member of the set
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            write!(f, "*")
        } else {
            write!(f, "{}", self.extensions.join(", "))
        }
    }
}

/// Lower-cased, dot-prefixed extension of a file name, if it has one
pub fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Outcome of consulting the policy for one filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Write the file to the output
    Include,
    /// Do not descend into this directory subtree at all
    Prune,
    /// The entry is, or shadows the name of, the output artifact
    SkipOutput,
    /// Hidden file outside the allow-list
    SkipHidden,
    /// Larger than the configured size limit
    SkipSize,
    /// Extension not in the configured set
    SkipExtension,
}

/// Include/exclude policy for one accumulation run
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    extensions: ExtensionSet,
    max_size_kb: u64,
    output_path: PathBuf,
    output_name: String,
}

impl FilterPolicy {
    /// Create a policy
    ///
    /// `output_path` must already be resolved to an absolute path; it is
    /// resolved once per run, before traversal.
    pub fn new(extensions: ExtensionSet, max_size_kb: u64, output_path: PathBuf) -> Self {
        let output_name = output_path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Self {
            extensions,
            max_size_kb,
            output_path,
            output_name,
        }
    }

    /// Decide whether to descend into a directory
    ///
    /// Directories themselves are never written to output; the only question
    /// is whether their subtree is traversed at all.
    pub fn decide_dir(&self, name: &str) -> Decision {
        if is_pruned_dir(name) {
            Decision::Prune
        } else {
            Decision::Include
        }
    }

    /// Decide whether a regular file belongs in the output
    ///
    /// Rules apply in precedence order; the first match wins. `abs_path`
    /// must be the file's absolute path so the self-exclusion comparison
    /// holds regardless of how the traversal root was spelled.
    pub fn decide_file(&self, abs_path: &Path, name: &str, size_bytes: u64) -> Decision {
        if name.to_lowercase() == self.output_name || abs_path == self.output_path {
            return Decision::SkipOutput;
        }

        if name.starts_with('.') && !HIDDEN_ALLOWLIST.contains(name) {
            return Decision::SkipHidden;
        }

        if self.max_size_kb > 0 && size_bytes / 1024 > self.max_size_kb {
            return Decision::SkipSize;
        }

        if !self.extensions.is_all() {
            match extension_of(name) {
                Some(ext) if self.extensions.contains(&ext) => {}
                _ => return Decision::SkipExtension,
            }
        }

        Decision::Include
    }
}
