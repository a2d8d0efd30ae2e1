//! circletool - detect circles of a physical size range in an image file

use circle_finder::config::{DPI_MAX, DPI_MIN, MM_MAX, MM_MIN};
use circle_finder::{Circle, RadiusRange, ScanConfig, scan};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "circletool", version, about = "Find circles of a given size in scanned images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect circles in an image and write an annotated copy
    Detect(DetectArgs),
    /// Print the pixel radius range for a resolution and diameter bounds
    Radius(SizeArgs),
}

#[derive(Debug, Clone, Args)]
struct SizeArgs {
    /// Image resolution in dots per inch
    #[arg(long)]
    dpi: Option<f64>,
    /// Smallest circle diameter in millimeters
    #[arg(long)]
    min_mm: Option<f64>,
    /// Largest circle diameter in millimeters
    #[arg(long)]
    max_mm: Option<f64>,
    /// JSON scan configuration; flags above take precedence
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct DetectArgs {
    /// Input image (png, jpg, tif)
    #[arg(long)]
    image: PathBuf,
    #[command(flatten)]
    size: SizeArgs,
    /// Where to write the annotated PNG
    #[arg(long, default_value = "circles_detected.png")]
    out: PathBuf,
    /// Optional path for a JSON report of the detected circles
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct CircleEntry {
    x: u32,
    y: u32,
    r: u32,
    diameter_mm: f64,
}

#[derive(Serialize)]
struct JsonReport {
    image: String,
    config: ScanConfig,
    radius_range: RadiusRange,
    width: u32,
    height: u32,
    circles: Vec<CircleEntry>,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Detect(args) => detect_cmd(&args),
        Command::Radius(args) => radius_cmd(&args),
    }
}

fn resolve_config(args: &SizeArgs) -> CliResult<ScanConfig> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ScanConfig::default(),
    };
    if let Some(dpi) = args.dpi {
        config.dpi = dpi;
    }
    if let Some(min_mm) = args.min_mm {
        config.min_mm = min_mm;
    }
    if let Some(max_mm) = args.max_mm {
        config.max_mm = max_mm;
    }

    config.validate()?;
    if !config.within_ui_bounds() {
        return Err(format!(
            "dpi must lie in {DPI_MIN}..={DPI_MAX} and diameters in {MM_MIN}..={MM_MAX} mm \
             (got dpi={}, min_mm={}, max_mm={})",
            config.dpi, config.min_mm, config.max_mm
        )
        .into());
    }
    Ok(config)
}

fn radius_cmd(args: &SizeArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let range = config.radius_range()?;
    println!(
        "{} mm .. {} mm at {} dpi -> radius {} px .. {} px",
        config.min_mm, config.max_mm, config.dpi, range.min, range.max
    );
    if range.max == 0 {
        println!("Note: an upper radius of 0 px does not limit the search");
    }
    Ok(())
}

fn detect_cmd(args: &DetectArgs) -> CliResult<()> {
    let config = resolve_config(&args.size)?;
    let bytes = std::fs::read(&args.image)?;

    let start = Instant::now();
    let output = scan(&bytes, &config)?;
    let elapsed = start.elapsed();

    println!(
        "Image: {} ({}x{}), radius range {}..{} px",
        args.image.display(),
        output.width,
        output.height,
        output.radius_range.min,
        output.radius_range.max
    );

    if output.circles.is_empty() {
        println!("No circles found in the requested size range ({elapsed:.2?})");
    } else {
        println!("Found {} circles ({elapsed:.2?})", output.circles.len());
        for (i, c) in output.circles.iter().enumerate() {
            println!(
                "  Circle {}: center=({}, {}) r={} px, diameter={:.2} mm",
                i,
                c.x,
                c.y,
                c.r,
                c.diameter_mm(config.dpi)
            );
        }
        std::fs::write(&args.out, &output.png)?;
        println!("Annotated image written to {}", args.out.display());
    }

    if let Some(path) = &args.json {
        let report = JsonReport {
            image: args.image.display().to_string(),
            config,
            radius_range: output.radius_range,
            width: output.width,
            height: output.height,
            circles: output.circles.iter().map(|c| entry(c, config.dpi)).collect(),
        };
        write_json(path, &report)?;
    }

    Ok(())
}

fn entry(c: &Circle, dpi: f64) -> CircleEntry {
    CircleEntry {
        x: c.x,
        y: c.y,
        r: c.r,
        diameter_mm: c.diameter_mm(dpi),
    }
}

fn write_json(path: &Path, report: &JsonReport) -> CliResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    tracing::info!("report written to {}", path.display());
    Ok(())
}
