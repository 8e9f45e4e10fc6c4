//! Placer CLI - build XLSX reports from JSON manifests

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use placer::prelude::*;
use placer::{CsvWriteOptions, FetchOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "placer")]
#[command(
    author,
    version,
    about = "Place tables, conditional formats and charts into XLSX workbooks"
)]
struct Cli {
    /// Log debug detail (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a workbook from a JSON manifest
    Build {
        /// Manifest file
        manifest: PathBuf,

        /// Output workbook (default: the manifest's `output`, else <manifest>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show where each table of a manifest would land, without writing
    Plan {
        /// Manifest file
        manifest: PathBuf,
    },

    /// Download the first HTML table of a page as CSV
    Fetch {
        /// Page URL
        url: String,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Username embedded into https URLs
        #[arg(short, long, requires = "password_env")]
        username: Option<String>,

        /// Environment variable holding the password
        #[arg(long, requires = "username")]
        password_env: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,

        /// Verify TLS certificates
        #[arg(long)]
        verify_certs: bool,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Build { manifest, output } => build(&manifest, output),
        Commands::Plan { manifest } => plan(&manifest),
        Commands::Fetch {
            url,
            output,
            username,
            password_env,
            timeout,
            verify_certs,
            delimiter,
        } => {
            let password = password_env
                .as_deref()
                .map(|var| {
                    std::env::var(var)
                        .with_context(|| format!("Environment variable '{}' is not set", var))
                })
                .transpose()?;
            let options = FetchOptions::default()
                .with_timeout(Duration::from_secs(timeout))
                .verify_certs(verify_certs);
            fetch(
                &url,
                username.as_deref(),
                password.as_deref(),
                options,
                output.as_deref(),
                delimiter,
            )
        }
    }
}

fn load_manifest(path: &Path) -> Result<Manifest> {
    Manifest::from_path(path).with_context(|| format!("Failed to load '{}'", path.display()))
}

fn build(manifest_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;
    let output = output
        .or_else(|| manifest.output_path())
        .unwrap_or_else(|| manifest_path.with_extension("xlsx"));

    let summary = manifest
        .build(&output)
        .with_context(|| format!("Failed to build '{}'", output.display()))?;

    for (id, placement) in &summary.placements {
        info!(
            "{}: '{}' rows {}..={}",
            id,
            placement.sheet,
            placement.start_row + 1,
            placement.end_row + 1
        );
    }
    eprintln!(
        "Wrote {} tables and {} charts to '{}'",
        summary.placements.len(),
        summary.charts.len(),
        output.display()
    );
    Ok(())
}

fn plan(manifest_path: &Path) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;
    let tables = manifest.load_tables().context("Failed to load table sources")?;

    let mut stdout = io::stdout().lock();
    for (id, table) in &tables {
        let layout = table
            .layout()
            .with_context(|| format!("Failed to lay out table '{}'", id))?;
        let placement = &layout.placement;

        writeln!(stdout, "{} \"{}\" on '{}'", id, table.title, placement.sheet)?;
        writeln!(stdout, "    title:  {}", layout.title)?;
        match placement.written_range() {
            Some(range) => writeln!(stdout, "    cells:  {}:{}", range.start, range.end)?,
            None => writeln!(stdout, "    cells:  title only")?,
        }
        for cf in &layout.conditional_formats {
            writeln!(stdout, "    format: {} on {}", cf.column, cf.a1_range())?;
        }
    }
    Ok(())
}

fn fetch(
    url: &str,
    username: Option<&str>,
    password: Option<&str>,
    options: FetchOptions,
    output: Option<&Path>,
    delimiter: char,
) -> Result<()> {
    let fetcher = TableFetcher::new(options).context("Failed to build HTTP client")?;
    let data = fetcher
        .fetch(url, username, password)
        .with_context(|| format!("Failed to fetch a table from '{}'", url))?;

    let delimiter = u8::try_from(delimiter).context("Delimiter must be a single-byte character")?;
    let options = CsvWriteOptions {
        delimiter,
        ..Default::default()
    };

    if let Some(output_path) = output {
        CsvWriter::write_file(&data, output_path, &options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote {} rows to '{}'", data.row_count(), output_path.display());
    } else {
        CsvWriter::write(&data, io::stdout().lock(), &options).context("Failed to write to stdout")?;
    }

    Ok(())
}
