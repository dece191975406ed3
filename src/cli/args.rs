use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hydromet-qc")]
#[command(about = "Quality control for daily hydro-meteorological station data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run all quality checks and write corrected data
    Process {
        #[arg(short, long, help = "Input whitespace-delimited observation file")]
        input_file: PathBuf,

        #[arg(
            short,
            long,
            help = "Corrected data CSV path [default: output/hydromet-qc-corrected-{YYMMDD}.csv]"
        )]
        output_file: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Check summary CSV path [default: output/hydromet-qc-checks-{YYMMDD}.csv]"
        )]
        checks_file: Option<PathBuf>,

        #[arg(long, help = "Combined statistics and check summary JSON report path")]
        json_report: Option<PathBuf>,

        #[arg(short, long, default_value = "comma", help = "Output delimiter: comma, space or tab")]
        delimiter: String,

        #[arg(long, default_value = "false")]
        validate_only: bool,

        #[arg(long, default_value = "false", help = "Memory-map the input file")]
        mmap: bool,
    },

    /// Run quality checks and report counts without writing output
    Validate {
        #[arg(short, long, help = "Input whitespace-delimited observation file")]
        input_file: PathBuf,

        #[arg(long, default_value = "false", help = "Memory-map the input file")]
        mmap: bool,
    },

    /// Display statistics for an observation file without correcting it
    Info {
        #[arg(short, long)]
        file: PathBuf,
    },
}
