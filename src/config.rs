/*!
 * Configuration handling for accumulate
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::filter::ExtensionSet;
use crate::utils::unique_directories;

/// Command-line arguments for accumulate
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "accumulate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate directory contents into a single annotated text file",
    long_about = "Walks selected directories and concatenates every matching file into one text file with per-file headers and separators. Run without arguments for interactive selection of directories, extensions and size limit."
)]
pub struct Args {
    /// Directories to process (bypasses the interactive picker when given)
    pub directories: Vec<String>,

    /// Comma-separated list of file extensions to include, or '*' for all files
    #[clap(short, long)]
    pub extensions: Option<String>,

    /// Maximum file size to include in KB (0 = no limit)
    #[clap(short = 's', long)]
    pub max_size: Option<u64>,

    /// Output file name
    #[clap(short, long, default_value = "accumulated_files.txt")]
    pub output: String,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration for one accumulation run
#[derive(Clone, Debug)]
pub struct Config {
    /// Working directory the run was started from
    pub working_dir: PathBuf,

    /// Directories to traverse, in selection order, deduplicated by
    /// resolved absolute path
    pub directories: Vec<PathBuf>,

    /// Extensions to include (the empty set matches all files)
    pub extensions: ExtensionSet,

    /// Size limit in kilobytes (0 = no limit)
    pub max_size_kb: u64,

    /// Output artifact path
    pub output_file: PathBuf,
}

impl Config {
    /// Assemble a configuration from a resolved selection
    pub fn new(
        working_dir: PathBuf,
        directories: Vec<String>,
        extensions: ExtensionSet,
        max_size_kb: u64,
        output: &str,
    ) -> Self {
        let output_file = if Path::new(output).is_absolute() {
            PathBuf::from(output)
        } else {
            working_dir.join(output)
        };

        let directories = unique_directories(
            &directories.into_iter().map(PathBuf::from).collect::<Vec<_>>(),
            &working_dir,
        );

        Self {
            working_dir,
            directories,
            extensions,
            max_size_kb,
            output_file,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(!self.directories.is_empty(), Config, "no directories selected");

        for dir in &self.directories {
            let resolved = if dir.is_absolute() {
                dir.clone()
            } else {
                self.working_dir.join(dir)
            };
            crate::ensure!(
                resolved.is_dir(),
                Config,
                "directory not found: {}",
                dir.display()
            );
        }

        if let Some(parent) = self.output_file.parent() {
            crate::ensure!(
                parent.as_os_str().is_empty() || parent.is_dir(),
                Config,
                "output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}
