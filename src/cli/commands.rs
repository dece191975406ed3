use std::fs::File;
use std::path::Path;

use tracing::Level;

use crate::analyzers::{QualityReport, SeriesAnalyzer};
use crate::cli::args::{Cli, Commands};
use crate::error::{ProcessingError, Result};
use crate::models::DailySeries;
use crate::processors::QualityPipeline;
use crate::readers::SeriesReader;
use crate::utils::filename::{generate_default_checks_filename, generate_default_corrected_filename};
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;

pub fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Process {
            input_file,
            output_file,
            checks_file,
            json_report,
            delimiter,
            validate_only,
            mmap,
        } => {
            println!("Processing daily observations...");
            println!("Input file: {}", input_file.display());

            let progress = ProgressReporter::new_spinner("Running quality checks...", false);

            let (mut series, mut ledger) = load_series(&input_file, mmap)?;

            let analyzer = SeriesAnalyzer::new();
            let raw_stats = analyzer.analyze(&series);

            let pipeline = QualityPipeline::new();
            pipeline.run(&mut series, &mut ledger);

            progress.finish_with_message(&format!(
                "Quality checks complete: {} cells affected",
                ledger.total_recorded().total()
            ));

            let corrected_stats = analyzer.analyze(&series);

            println!("\n{}", raw_stats.summary("Raw data"));
            println!("{}", corrected_stats.summary("Corrected data"));
            println!("{}", ledger.summary());

            if validate_only {
                println!("Validation complete - no output files written");
                return Ok(());
            }

            let output_file = output_file.unwrap_or_else(generate_default_corrected_filename);
            let checks_file = checks_file.unwrap_or_else(generate_default_checks_filename);

            // Create output directories if they don't exist
            for path in [&output_file, &checks_file] {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            let writer = CsvWriter::new().with_delimiter(&delimiter)?;
            writer.write_series(&series, &output_file)?;
            writer.write_ledger(&ledger, &checks_file)?;

            println!("Corrected data written to {}", output_file.display());
            println!("Check summary written to {}", checks_file.display());

            if let Some(report_path) = json_report {
                let report = QualityReport {
                    raw: raw_stats,
                    corrected: corrected_stats,
                    ledger,
                };
                if let Some(parent) = report_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                serde_json::to_writer_pretty(File::create(&report_path)?, &report)?;
                println!("JSON report written to {}", report_path.display());
            }

            println!("Processing complete!");
        }

        Commands::Validate { input_file, mmap } => {
            println!("Validating daily observations...");
            println!("Input file: {}", input_file.display());

            let progress = ProgressReporter::new_spinner("Running quality checks...", false);

            let (mut series, mut ledger) = load_series(&input_file, mmap)?;

            let pipeline = QualityPipeline::new();
            pipeline.run(&mut series, &mut ledger);

            progress.finish_with_message("Validation complete");

            println!("\n{}", ledger.summary());

            let affected = ledger.total_recorded().total();
            if affected == 0 {
                println!("✅ All values passed quality checks");
            } else {
                println!("⚠️  {} values corrected or removed", affected);
            }
        }

        Commands::Info { file } => {
            println!("Analyzing observation file: {}", file.display());

            let (series, _ledger) = load_series(&file, false)?;

            let stats = SeriesAnalyzer::new().analyze(&series);
            println!("\n{}", stats.summary("Observations"));
        }
    }

    Ok(())
}

fn load_series(path: &Path, mmap: bool) -> Result<(DailySeries, crate::models::CorrectionLedger)> {
    let reader = SeriesReader::with_mmap(mmap);
    let (series, ledger) = reader.read_series(path)?;

    if series.is_empty() {
        return Err(ProcessingError::MissingData(format!(
            "no observations found in {}",
            path.display()
        )));
    }

    Ok((series, ledger))
}
