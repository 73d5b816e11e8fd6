use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use asset_reader::ReaderConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "asset-cat")]
#[command(about = "Print a bundled resource", long_about = None)]
struct Cli {
    /// JSON reader config; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bundle directory
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Extra directory searched after the root, may be repeated
    #[arg(short = 'I', long = "include")]
    include_paths: Vec<PathBuf>,

    #[arg(long)]
    chunk_size: Option<usize>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the resources in the bundle
    #[arg(short, long)]
    list: bool,

    name: Option<String>,
}

fn config(args: &Cli) -> Result<ReaderConfig> {
    let config = match &args.config {
        Some(path) => ReaderConfig::from_path(path)
            .with_context(|| format!("Couldn't load {}", path.display()))?,
        None => ReaderConfig::default(),
    };
    let config = config.with_overrides(
        args.root.clone(),
        args.include_paths.iter().cloned(),
        args.chunk_size,
    )?;
    Ok(config)
}

fn run(args: Cli) -> Result<ExitCode> {
    let config = config(&args)?;

    if args.list {
        let names = config.provider().names().with_context(|| {
            format!("Couldn't list {}", config.root.display())
        })?;
        let mut stdout = io::stdout().lock();
        for name in names {
            writeln!(stdout, "{}", name)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let name = args
        .name
        .as_deref()
        .context("A resource name is required unless --list is given")?;
    let reader = config.into_reader()?;
    let bytes = match reader.load(name) {
        Some(bytes) => bytes,
        None => {
            eprintln!("{} is unavailable", name);
            return Ok(ExitCode::FAILURE);
        }
    };

    match &args.output {
        Some(path) => {
            let mut file = File::create(path).with_context(|| {
                format!("Couldn't create {}", path.display())
            })?;
            file.write_all(&bytes)?;
        }
        None => io::stdout().lock().write_all(&bytes)?,
    }
    log::info!("{} bytes written", bytes.len());
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
