use crate::cli::args::Cli;
use crate::error::{CollectorError, Result};
use crate::models::select_rows;
use crate::processors::Collector;
use crate::readers::CoordinateReader;
use crate::utils::progress::ProgressReporter;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Install the global `tracing` subscriber.
///
/// Diagnostics go to stderr, or to `log_file` when given (appended, no colours).
pub fn init_tracing(verbose: bool, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| CollectorError::Config(format!("Failed to install logger: {}", e)))
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config().validated()?;
    let quiet = cli.quiet;

    // Structural problems with the input abort before anything is written
    if !quiet {
        println!("Loading CSV file: {}", cli.csv_file_path.display());
    }
    let reader = CoordinateReader::with_columns(&config.latitude_column, &config.longitude_column);
    let rows = reader.read_coordinates(&cli.csv_file_path)?;
    if !quiet {
        println!("Loaded {} location(s) from CSV.", rows.len());
    }

    let collector = Collector::new(config)?;
    if !quiet {
        println!("Project area: {}", collector.config().project_area);
        println!(
            "Directories prepared:\n - Images: {}\n - Concatenated Images: {}",
            collector.images_dir().display(),
            collector.composite_dir().display()
        );
    }

    let selected = select_rows(&rows, collector.config().start_row, collector.config().end_row);
    let progress = ProgressReporter::new(
        selected.len() as u64,
        "Collecting street view images...",
        quiet,
    );

    let summary = collector.run(&rows, Some(&progress)).await?;
    progress.finish_with_message(&format!("Processed {} point(s)", summary.rows_processed));

    if !quiet {
        println!("\n{}", summary.summary());
        println!(
            "Process completed. Check logs for details:\n - {}\n - {}",
            collector.success_log().path().display(),
            collector.failure_log().path().display()
        );
    }

    Ok(())
}
