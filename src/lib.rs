/*!
 * Accumulate - concatenate directory contents into a single text file
 *
 * This library walks a set of selected directories, filters files by
 * extension and size, and streams the survivors into one annotated text
 * artifact with per-file headers and separators.
 */

pub mod accumulator;
pub mod config;
pub mod error;
pub mod filter;
pub mod report;
pub mod select;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use accumulator::{AccumulationCounters, AccumulationStats, Accumulator};
pub use config::{Args, Config};
pub use error::{AccumulateError, Result};
pub use filter::{Decision, ExtensionSet, FilterPolicy};
pub use report::{AccumulationReport, FileReportInfo, ReportFormat, Reporter};
pub use utils::format_file_size;
pub use writer::{AccumulateWriter, FILE_SEPARATOR};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
