//! netcentric — closeness metrics for networks and their subnetworks.
//!
//! Takes a network file (`.gml` or `.xgmml`), or a folder of such files,
//! and writes one tab-separated report per input: the whole network first,
//! then every connected component.
//!
//! ```text
//! netcentric --input-file net.gml
//! netcentric --input-file net.gml --output-file report.tsv
//! netcentric --input-folder networks/
//! ```
//!
//! Log level defaults to `netcentric=info`; override with `NETCENTRIC_LOG`.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use netcentric_io::is_network_file;
use netcentric_pipeline::{default_output_path, process_batch, process_source};

#[derive(Parser, Debug)]
#[command(name = "netcentric")]
#[command(about = "Closeness centrality per network and subnetwork")]
struct Cli {
    /// Input network file (.gml or .xgmml); takes precedence over --input-folder
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Process every .gml / .xgmml file in this folder
    #[arg(long)]
    input_folder: Option<PathBuf>,

    /// Output path for single-file mode (default: <input>.closeness.csv)
    #[arg(long)]
    output_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("NETCENTRIC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("netcentric=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match (cli.input_file, cli.input_folder) {
        (Some(file), _) => run_single(file, cli.output_file),
        (None, Some(folder)) => run_folder(folder),
        (None, None) => {
            bail!("you need to provide an input file via --input-file or a folder via --input-folder")
        }
    }
}

fn run_single(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !input.is_file() {
        bail!("{} does not exist", input.display());
    }
    let output = output.unwrap_or_else(|| default_output_path(&input));
    process_source(&input, &output)?;
    Ok(())
}

fn run_folder(folder: PathBuf) -> Result<()> {
    if !folder.is_dir() {
        bail!("{} is not a valid folder", folder.display());
    }

    let mut sources = Vec::new();
    for entry in folder.read_dir()? {
        let path = entry?.path();
        if path.is_file() && is_network_file(&path) {
            sources.push(path);
        }
    }
    if sources.is_empty() {
        warn!(folder = %folder.display(), "no valid files ending with .gml or .xgmml could be found");
        return Ok(());
    }

    let report = process_batch(&sources);
    info!(
        processed = report.processed.len(),
        failed = report.failures.len(),
        "batch finished"
    );
    for failure in &report.failures {
        warn!(source = %failure.source.display(), reason = %failure.reason, "source skipped");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_file_invocation() {
        let cli = Cli::try_parse_from(["netcentric", "--input-file", "net.gml"]).unwrap();
        assert_eq!(cli.input_file, Some(PathBuf::from("net.gml")));
        assert!(cli.input_folder.is_none());
        assert!(cli.output_file.is_none());
    }

    #[test]
    fn parses_folder_invocation_with_output() {
        let cli = Cli::try_parse_from([
            "netcentric",
            "--input-folder",
            "nets",
            "--output-file",
            "out.tsv",
        ])
        .unwrap();
        assert_eq!(cli.input_folder, Some(PathBuf::from("nets")));
        assert_eq!(cli.output_file, Some(PathBuf::from("out.tsv")));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["netcentric", "--frobnicate"]).is_err());
    }
}
