use anyhow::Context;
use clap::Parser;
use hydromet_qc::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("quality control processing failed")
}
