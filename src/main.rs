use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use petabidang::render::ParcelRecord;
use petabidang::{load_scene, render_preview, PlotConfig};

#[derive(Parser)]
#[command(version, about = "Survey drawing rendering pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the preview markup (full + boundary-only SVG) as JSON.
    Preview {
        /// Parsed scene document (JSON).
        scene: PathBuf,
        /// Parcel records (JSON array), ordered by creation time.
        #[arg(short, long, value_name = "FILE")]
        parcels: Option<PathBuf>,
    },
    /// Compute the print page layout for the fixed A3-landscape sheet.
    Page {
        scene: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        parcels: Option<PathBuf>,
        /// Output units per inch (72 for point-based page formats).
        #[arg(long, default_value_t = 72.0)]
        units_per_inch: f64,
    },
    /// Export parcel boundaries as a WGS84 GeoJSON feature collection.
    Geojson {
        scene: PathBuf,
        /// Identifier of the source drawing, tagged onto every feature.
        #[arg(long, value_name = "ID")]
        drawing_id: String,
    },
}

fn load_parcels(path: Option<&PathBuf>) -> Result<Vec<ParcelRecord>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parcel records: {path:?}"))?;
    serde_json::from_str(&raw).with_context(|| "Failed to parse parcel records")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = PlotConfig::default();

    match cli.command {
        Command::Preview { scene, parcels } => {
            let scene = load_scene(&scene)?;
            let parcels = load_parcels(parcels.as_ref())?;
            let preview = render_preview(&scene, &parcels, &cfg)?;
            println!("{}", serde_json::to_string_pretty(&preview)?);
        }
        Command::Page {
            scene,
            parcels,
            units_per_inch,
        } => {
            let scene = load_scene(&scene)?;
            let parcels = load_parcels(parcels.as_ref())?;
            let cfg = PlotConfig {
                units_per_inch,
                ..cfg
            };
            let preview = render_preview(&scene, &parcels, &cfg)?;
            let layout = petabidang::layout_print_page(&preview, &cfg);
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Command::Geojson { scene, drawing_id } => {
            let scene = load_scene(&scene)?;
            let collection = petabidang::export_geo(&scene, &drawing_id, &cfg);
            println!("{}", serde_json::to_string_pretty(&collection)?);
        }
    }

    Ok(())
}
