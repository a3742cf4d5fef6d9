use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use design_patterns::catalog::{self, CatalogConfig};
use design_patterns::logging;
use tracing::debug;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Checks that every pattern section pairs prose with one self-contained sample.
#[derive(Debug, Parser)]
#[command(name = "check_catalog", version)]
struct Args {
    /// Catalog document; defaults to the `document` entry of the config.
    path: Option<PathBuf>,

    /// Config file, ignored when absent.
    #[arg(short, long, default_value = "catalog.toml")]
    config: PathBuf,

    /// Extra names samples may use without defining them.
    #[arg(long = "known-type", value_name = "NAME")]
    known_types: Vec<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<bool, Box<dyn Error>> {
    let mut config = CatalogConfig::load_or_default(&args.config)?;
    config.known_types.extend(args.known_types);
    if let Some(path) = args.path {
        config.document = path;
    }
    debug!(?config, "resolved config");

    let report = catalog::check_file(&config.document, &config)?;
    match args.format {
        Format::Text => println!("{}", report.render_text(&config.document.display().to_string())),
        Format::Json => println!("{}", report.to_json()?),
    }
    Ok(report.is_clean())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args.log_level);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(2)
        }
    }
}
