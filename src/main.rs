/*!
 * Command-line interface for accumulate
 */

use std::env;
use std::io;
use std::process;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use accumulate::accumulator::Accumulator;
use accumulate::config::{Args, Config};
use accumulate::error::{AccumulateError, Result};
use accumulate::filter::ExtensionSet;
use accumulate::report::{AccumulationReport, ReportFormat, Reporter};
use accumulate::select;
use accumulate::utils::count_candidate_files;

fn main() {
    match run() {
        Ok(()) => {}
        Err(AccumulateError::Cancelled) => {
            // User-initiated, clean exit
            println!("\nSelection cancelled by user.");
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Shell completion generation short-circuits everything else
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    println!("Accumulate - File Accumulation Tool");
    println!("===================================");

    let working_dir = env::current_dir()?;
    println!("Current directory: {}", working_dir.display());

    let interactive = args.directories.is_empty();

    // Resolve the directory set: positional arguments bypass the picker
    let directories = if interactive {
        let candidates = select::candidate_directories(&working_dir)?;
        let selected = select::select_directories(&candidates)?;
        if selected.is_empty() {
            println!("No directories selected. Exiting.");
            return Ok(());
        }
        selected
    } else {
        args.directories.clone()
    };

    let extensions = match &args.extensions {
        Some(list) => ExtensionSet::parse(list)?,
        None if interactive => select::prompt_extensions()?,
        None => ExtensionSet::all(),
    };

    let max_size_kb = match args.max_size {
        Some(kb) => kb,
        None if interactive => select::prompt_size_limit()?,
        None => 0,
    };

    let config = Config::new(working_dir, directories, extensions, max_size_kb, &args.output);
    config.validate()?;

    // Progress bar with the per-file message in the wide slot
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📊 Accumulating");
    progress.set_length(count_candidate_files(&config.directories, &config.working_dir));

    let start_time = Instant::now();

    let accumulator = Accumulator::new(config.clone(), progress.clone());
    let stats = accumulator.run()?;

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    let report = AccumulationReport {
        output_file: config.output_file.display().to_string(),
        duration,
        counters: stats.counters,
        file_details: stats.file_details,
    };
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    println!("\nDone! Combined output saved to: {}", config.output_file.display());

    Ok(())
}
