/*!
 * Directory traversal and accumulation pipeline
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::filter::{Decision, FilterPolicy};
use crate::report::FileReportInfo;
use crate::utils::absolutize;
use crate::writer::AccumulateWriter;

/// Running counters for one accumulation run
///
/// Mutated monotonically while the run is in flight, read once at the end
/// for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulationCounters {
    /// Files fully written to the output
    pub processed: usize,
    /// Files over the size limit
    pub skipped_size: usize,
    /// Files outside the extension set
    pub skipped_ext: usize,
    /// Files excluded as the output artifact (by name or path)
    pub skipped_output: usize,
    /// Hidden files outside the allow-list
    pub skipped_hidden: usize,
    /// Total bytes accumulated
    pub total_bytes: u64,
}

/// Counters plus per-file details gathered during a run
#[derive(Debug, Clone, Default)]
pub struct AccumulationStats {
    /// Monotonic counters for the run
    pub counters: AccumulationCounters,
    /// Byte counts for each accumulated file, keyed by display path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Walks the selected directories and streams matching files into the sink
pub struct Accumulator {
    config: Config,
    progress: ProgressBar,
}

impl Accumulator {
    /// Create a new accumulator
    pub fn new(config: Config, progress: ProgressBar) -> Self {
        Self { config, progress }
    }

    /// Run the accumulation and return the final statistics
    ///
    /// The output sink is created before any traversal; failing to create
    /// it, or any later write to it, aborts the whole run. Per-entry access
    /// and read errors are diagnosed and skipped.
    pub fn run(&self) -> Result<AccumulationStats> {
        let mut writer = AccumulateWriter::create(&self.config.output_file)?;
        let output_path = writer.resolved_path()?;

        let policy = FilterPolicy::new(
            self.config.extensions.clone(),
            self.config.max_size_kb,
            output_path,
        );

        let mut stats = AccumulationStats::default();

        for dir in &self.config.directories {
            self.progress
                .println(format!("📁 Processing directory: {}", dir.display()));
            self.accumulate_directory(dir, &policy, &mut writer, &mut stats)?;
        }

        writer.finish()?;

        Ok(stats)
    }

    /// Traverse one directory depth-first, accumulating matching files
    fn accumulate_directory(
        &self,
        dir: &Path,
        policy: &FilterPolicy,
        writer: &mut AccumulateWriter,
        stats: &mut AccumulationStats,
    ) -> Result<()> {
        let root = absolutize(dir, &self.config.working_dir);

        let walker = WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| {
                !(entry.file_type().is_dir()
                    && policy.decide_dir(&entry.file_name().to_string_lossy())
                        == Decision::Prune)
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // Recovered: permission denied, vanished entry, etc.
                    self.progress
                        .println(format!("  ⚠ Skipped (inaccessible): {}", err));
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            self.progress.inc(1);

            // Display the path the way the directory was spelled
            let rel = entry.path().strip_prefix(&root).unwrap_or_else(|_| entry.path());
            let display = dir.join(rel).display().to_string();
            self.progress.set_message(display.clone());

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => {
                    self.progress
                        .println(format!("  ⚠ Skipped (inaccessible): {}: {}", display, err));
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy();
            let size = metadata.len();

            match policy.decide_file(entry.path(), &name, size) {
                Decision::Include => {
                    let content = match fs::read(entry.path()) {
                        Ok(content) => content,
                        Err(err) => {
                            // Recovered: the file stays out of every counter
                            self.progress
                                .println(format!("  ⚠ Error reading file {}: {}", display, err));
                            continue;
                        }
                    };

                    // A sink failure here is fatal for the whole run
                    writer.write_file(&display, size, &content)?;

                    stats.counters.processed += 1;
                    stats.counters.total_bytes += size;
                    stats
                        .file_details
                        .insert(display.clone(), FileReportInfo { bytes: size });

                    self.progress
                        .println(format!("  ✓ {} ({} KB)", display, size / 1024));
                }
                Decision::SkipOutput => {
                    stats.counters.skipped_output += 1;
                    self.progress
                        .println(format!("  ⚠ Skipped (output artifact): {}", display));
                }
                Decision::SkipHidden => {
                    stats.counters.skipped_hidden += 1;
                    self.progress
                        .println(format!("  ⚠ Skipped (hidden): {}", display));
                }
                Decision::SkipSize => {
                    stats.counters.skipped_size += 1;
                    self.progress.println(format!(
                        "  ⚠ Skipped (size: {} KB > limit {} KB): {}",
                        size / 1024,
                        self.config.max_size_kb,
                        display
                    ));
                }
                Decision::SkipExtension => {
                    stats.counters.skipped_ext += 1;
                }
                // Never produced for regular files
                Decision::Prune => {}
            }
        }

        Ok(())
    }
}
