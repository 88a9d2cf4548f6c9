/*!
 * Reporting functionality for accumulate
 *
 * Provides formatted end-of-run reports using the tabled library for
 * clean, consistent table rendering.
 */

use std::collections::HashMap;
use std::time::Duration;

use chrono::Local;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::accumulator::AccumulationCounters;
use crate::utils::format_file_size;

/// Information about one accumulated file
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReportInfo {
    /// Bytes written for the file
    pub bytes: u64,
}

/// Final statistics for an accumulation run
#[derive(Debug, Clone)]
pub struct AccumulationReport {
    /// Output artifact path
    pub output_file: String,
    /// Wall time for the whole run
    pub duration: Duration,
    /// Counters gathered during traversal
    pub counters: AccumulationCounters,
    /// Details for each accumulated file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Report generator for accumulation results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a count with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Total accumulated size in MB
    fn format_size_mb(&self, bytes: u64) -> String {
        format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
    }

    // Truncate a path for display, keeping the trailing segments
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.len() <= max_len {
            return path.to_string();
        }

        let parts: Vec<&str> = path.split('/').collect();
        let mut kept = Vec::new();
        let mut current_len = 3; // Start with "..."

        for part in parts.iter().rev() {
            let part_len = part.len() + 1; // +1 for '/'
            if current_len + part_len > max_len {
                break;
            }
            kept.push(*part);
            current_len += part_len;
        }

        if kept.is_empty() {
            return format!("...{}", &path[path.len().saturating_sub(max_len - 3)..]);
        }

        let mut result = String::from("...");
        for part in kept.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    /// Generate a report string based on run statistics
    pub fn generate_report(&self, report: &AccumulationReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &AccumulationReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create the counter summary table
    fn create_summary_table(&self, report: &AccumulationReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let counters = &report.counters;
        let mut rows = Vec::new();

        rows.push(SummaryRow {
            key: "📂 Output File".to_string(),
            value: report.output_file.clone(),
        });

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        rows.push(SummaryRow {
            key: "📄 Files Processed".to_string(),
            value: self.format_number(counters.processed),
        });

        rows.push(SummaryRow {
            key: "⚠ Skipped (size)".to_string(),
            value: self.format_number(counters.skipped_size),
        });

        rows.push(SummaryRow {
            key: "⚠ Skipped (extension)".to_string(),
            value: self.format_number(counters.skipped_ext),
        });

        rows.push(SummaryRow {
            key: "⚠ Skipped (output artifact)".to_string(),
            value: self.format_number(counters.skipped_output),
        });

        rows.push(SummaryRow {
            key: "⚠ Skipped (hidden)".to_string(),
            value: self.format_number(counters.skipped_hidden),
        });

        rows.push(SummaryRow {
            key: "📦 Total Size".to_string(),
            value: self.format_size_mb(counters.total_bytes),
        });

        rows.push(SummaryRow {
            key: "🕒 Completed".to_string(),
            value: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create the accumulated-files table
    fn create_files_table(&self, report: &AccumulationReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        // Largest files first
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.bytes.cmp(&a.bytes));

        let files_to_show = if report.file_details.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                size: format_file_size(info.bytes),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate the console report: files first, then the summary
    fn generate_console_report(&self, report: &AccumulationReport) -> String {
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        let summary_title = "✅  ACCUMULATION COMPLETE";
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST ACCUMULATED FILES"
        } else {
            "📋  ACCUMULATED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}
