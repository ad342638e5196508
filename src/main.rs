use anyhow::{Context, Result};
use clap::Parser;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use merc2geo::config::FileConfig;
use merc2geo::geojson::DocumentConverter;

/// Convert Web Mercator (EPSG:3857) GeoJSON polygons to WGS84 longitude/latitude
///
/// Accepts a bare Polygon or MultiPolygon geometry, a Feature, or a
/// FeatureCollection. Other geometry types pass through unchanged.
///
/// Examples:
///   # Convert a file, writing to stdout
///   merc2geo meshblock.json
///
///   # Read stdin, keep Z values, pretty-print to a file
///   cat shapes.json | merc2geo --dims 3 --pretty -o shapes_wgs84.json
///
///   # Use a config file
///   merc2geo --config my-settings.toml input.json
#[derive(Parser, Debug)]
#[command(name = "merc2geo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input GeoJSON file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Ordinates per position when the geometry has no dims member
    #[arg(short = 'd', long, value_parser = clap::value_parser!(u8).range(2..=4))]
    dims: Option<u8>,

    /// Pretty-print the output JSON
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Path to config file (optional, auto-searches merc2geo.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (file_config, config_warnings) = match args.config {
        Some(ref config_path) => (Some(FileConfig::from_path(config_path)?), Vec::new()),
        None => FileConfig::load(),
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let pretty = args.pretty || file_config.as_ref().map(|c| c.pretty).unwrap_or(false);
    let dims = args
        .dims
        .map(usize::from)
        .or_else(|| file_config.as_ref().and_then(|c| c.dims));

    init_logging(verbose);

    for warning in &config_warnings {
        log::warn!("{}", warning);
    }

    log::debug!("Configuration: dims={:?}, pretty={}", dims, pretty);

    let start = Instant::now();
    let contents = read_input(args.input.as_deref())?;
    let document: serde_json::Value =
        serde_json::from_str(&contents).context("Failed to parse GeoJSON input")?;

    let mut converter = DocumentConverter::new(dims);
    let converted = converter
        .convert(&document)
        .context("Failed to convert geometry")?;

    let report = converter.report();
    log::info!(
        "{} [{:.1}ms]",
        report.summary(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    for warning in &report.warnings {
        log::info!("  {}", warning);
    }
    if let Some(ref bounds) = report.bounds {
        log::info!(
            "Bounds: lon {:.6}..{:.6}, lat {:.6}..{:.6} ({:.6} x {:.6} degrees)",
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
            bounds.width(),
            bounds.height()
        );
    }

    let rendered = if pretty {
        serde_json::to_string_pretty(&converted)
    } else {
        serde_json::to_string(&converted)
    }
    .context("Failed to serialize GeoJSON output")?;

    write_output(args.output.as_deref(), &rendered)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {:?}", p)),
        _ => {
            let mut contents = String::new();
            std::io::stdin()
                .read_to_string(&mut contents)
                .context("Failed to read GeoJSON from stdin")?;
            Ok(contents)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write output file: {:?}", p))?;
            log::info!("Wrote {}", p.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered).context("Failed to write GeoJSON to stdout")?;
        }
    }
    Ok(())
}
