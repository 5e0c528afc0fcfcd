mod parse;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Render a log file as a searchable HTML table
#[derive(Parser)]
#[clap(version = "0.1")]
struct Opts {
    /// Log file with `YYYY-MM-DD HH:MM:SS,mmm [LEVEL] message` lines
    input: PathBuf,
    #[clap(short, long, default_value = "log_report.html")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli_opts: Opts = Opts::parse();
    generate(&cli_opts.input, &cli_opts.output)?;
    println!("HTML log report generated: {}", cli_opts.output.display());

    Ok(())
}

fn generate(input: &Path, output: &Path) -> Result<usize> {
    let contents = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let entries = parse::parse(&contents);
    log::debug!("parsed {} entries from {}", entries.len(), input.display());

    fs::write(output, render::render(&entries))
        .with_context(|| format!("writing {}", output.display()))?;

    Ok(entries.len())
}
