use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use snv_annotator::{Annotator, AnnotatorConfig, LookupBackend};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "snv-annotator",
    about = "Predict the functional consequences of single nucleotide variants"
)]
struct Cli {
    /// Number of concurrent lookups.
    #[arg(short = 't', long = "threads", default_value_t = 1)]
    threads: usize,
    /// Lookup executable invoked as `<tool> <db> <chrom:start-end>`.
    #[arg(long, default_value = snv_annotator::config::DEFAULT_LOOKUP_TOOL)]
    lookup_tool: PathBuf,
    /// How database records are fetched.
    #[arg(long, value_enum, default_value_t = LookupBackend::Command)]
    backend: LookupBackend,
    /// Mutation data to process (`chromosome,position,ref,alt` per line).
    input: PathBuf,
    /// Where predictions are written.
    output: PathBuf,
    /// Precomputed, tabix-indexed prediction database.
    db: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let config = AnnotatorConfig::new(cli.input, cli.output, cli.db)
        .with_threads(cli.threads)
        .with_lookup_tool(cli.lookup_tool)
        .with_backend(cli.backend);
    let output = config.output.clone();

    Annotator::new(config)
        .run()
        .with_context(|| format!("annotation run for {} failed", output.display()))?;

    Ok(())
}

/// Accept the single-dash `-threads N` / `-threads=N` spelling.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-threads") => OsString::from("--threads"),
            Some(value) if value.starts_with("-threads=") => OsString::from(format!("-{value}")),
            _ => arg,
        })
        .collect()
}
