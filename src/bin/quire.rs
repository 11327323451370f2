//! Command-line interface for quire
//!
//! Usage:
//!   quire build [--config `<file>`] [--source `<dir>`] [--output `<dir>`]   - Render a directory of documents
//!   quire process `<path>` `<format>`                                     - Inspect one file at a pipeline stage
//!   quire formats                                                       - List the process formats
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::{bail, Context};
use clap::{Arg, Command};
use quire::quire::config::Loader;
use quire::quire::processor::{available_formats, process_file, ProcessingSpec};
use quire::quire::site::build_from_config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives when set and valid, `info` otherwise
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let matches = Command::new("quire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile quire markup documents into HTML pages")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("build")
                .about("Render every document of the source directory into the output directory")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("source")
                        .long("source")
                        .short('s')
                        .help("Directory holding the documents"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Directory the pages are written to"),
                ),
        )
        .subcommand(
            Command::new("process")
                .about("Print one file at a pipeline stage")
                .arg(
                    Arg::new("path")
                        .help("Path to the document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help("Stage and format, e.g. 'ast-tag' (see `quire formats`)")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(Command::new("formats").about("List the formats accepted by `process`"))
        .get_matches();

    match matches.subcommand() {
        Some(("build", args)) => handle_build_command(
            args.get_one::<String>("config"),
            args.get_one::<String>("source"),
            args.get_one::<String>("output"),
        ),
        Some(("process", args)) => {
            let path = args
                .get_one::<String>("path")
                .context("path is required")?;
            let format = args
                .get_one::<String>("format")
                .context("format is required")?;
            handle_process_command(path, format)
        }
        Some(("formats", _)) => {
            for format in available_formats() {
                println!("{}", format);
            }
            Ok(())
        }
        _ => bail!("unknown command"),
    }
}

/// Handle the build command
fn handle_build_command(
    config: Option<&String>,
    source: Option<&String>,
    output: Option<&String>,
) -> anyhow::Result<()> {
    let mut loader = Loader::new();
    if let Some(path) = config {
        loader = loader.with_file(path);
    }
    if let Some(dir) = source {
        loader = loader.set_override("site.source_dir", dir.as_str())?;
    }
    if let Some(dir) = output {
        loader = loader.set_override("site.output_dir", dir.as_str())?;
    }
    let config = loader.build().context("failed to load configuration")?;

    let report = build_from_config(&config.site)?;
    for skipped in &report.skipped {
        eprintln!("skipped {}: {}", skipped.name, skipped.error);
    }
    info!(
        pages = report.rendered.len(),
        output = %config.site.output_dir.display(),
        "done"
    );
    Ok(())
}

/// Handle the process command
fn handle_process_command(path: &str, format: &str) -> anyhow::Result<()> {
    let spec = ProcessingSpec::from_string(format).with_context(|| {
        format!(
            "unknown format '{}', expected one of: {}",
            format,
            available_formats().join(", ")
        )
    })?;
    let output = process_file(path, &spec).with_context(|| format!("failed to process {}", path))?;
    println!("{}", output);
    Ok(())
}
