//! Cartographic rendering pipeline for the survey office: turns a parsed
//! CAD scene into preview markup, a fixed print-page layout, and WGS84
//! parcel polygons for the web map.
//!
//! The chain is pure and synchronous; every request owns its own scene
//! and render results. The CAD parser, the rasterizer and the
//! page-document writer are external collaborators on the other side of
//! serde boundaries.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use petabidang_geo::{extract_geo_polygons, feature_collection, TM3_ZONE_49_1};
use petabidang_page::{PageLayout, DEFAULT_UNITS_PER_INCH};
use petabidang_render::compose::PARCEL_LAYER;
use petabidang_render::svg::to_svg;
use petabidang_render::{compose_boundary, compose_main, CanvasBudget, ParcelRecord};
use petabidang_scene::{extent_of, Scene};

pub use petabidang_geo as geo;
pub use petabidang_page as page;
pub use petabidang_render as render;
pub use petabidang_scene as scene;

/// Fixed plot parameters for the issued survey documents.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Survey plot scale, 1:250.
    pub scale_denominator: f64,
    /// Half an A3 sheet; the main diagram never prints wider.
    pub max_width_mm: f64,
    pub padding_mm: f64,
    pub parcel_layer: String,
    pub title: String,
    pub units_per_inch: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            scale_denominator: 250.0,
            max_width_mm: 148.0,
            padding_mm: 10.0,
            parcel_layer: PARCEL_LAYER.to_string(),
            title: "Gambar Hasil Ukur".to_string(),
            units_per_inch: DEFAULT_UNITS_PER_INCH,
        }
    }
}

impl PlotConfig {
    pub fn scale_legend(&self) -> String {
        format!("Skala 1:{}", self.scale_denominator.round() as i64)
    }
}

/// Terminal outcomes for one request. The boundary render missing is not
/// here: it degrades to an absent panel instead of failing the request.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("no source drawing found")]
    SourceMissing,
    #[error("drawing could not be parsed: {0}")]
    UnreadableDrawing(String),
    #[error("drawing has no renderable geometry")]
    EmptySheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SheetDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Preview payload for the client: two markup strings plus their physical
/// sizes in millimeters.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub svg_full: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_boundary: Option<String>,
    pub dimensions: SheetDimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_boundary: Option<SheetDimensions>,
}

/// Reads the parsed-scene document the CAD parser collaborator produced.
pub fn load_scene(path: &Path) -> Result<Scene, PlotError> {
    let raw = fs::read_to_string(path).map_err(|_| PlotError::SourceMissing)?;
    parse_scene(&raw)
}

pub fn parse_scene(raw: &str) -> Result<Scene, PlotError> {
    serde_json::from_str(raw).map_err(|e| PlotError::UnreadableDrawing(e.to_string()))
}

/// Renders the full diagram and, when the parcel layer has closed
/// polygons, the boundary-only diagram, each sized to its own physical
/// sheet and fit to its own canvas.
pub fn render_preview(
    scene: &Scene,
    parcels: &[ParcelRecord],
    cfg: &PlotConfig,
) -> Result<Preview, PlotError> {
    let bbox = extent_of(&scene.entities).ok_or(PlotError::EmptySheet)?;
    if !bbox.is_finite() {
        return Err(PlotError::EmptySheet);
    }

    let canvas = CanvasBudget::sheet_mm(
        &bbox,
        cfg.scale_denominator,
        cfg.padding_mm,
        Some(cfg.max_width_mm),
    );
    let dimensions = SheetDimensions {
        width_mm: canvas.width,
        height_mm: canvas.height,
    };
    debug!(
        width_mm = dimensions.width_mm,
        height_mm = dimensions.height_mm,
        "sized main sheet"
    );

    let main = compose_main(scene, canvas, &cfg.parcel_layer, parcels)
        .map_err(|_| PlotError::EmptySheet)?;
    let svg_full = to_svg(&main);

    let mut svg_boundary = None;
    let mut dimensions_boundary = None;
    if let Some(bb) = extent_of(scene.boundary_entities(&cfg.parcel_layer)) {
        if bb.is_finite() {
            let canvas_b = CanvasBudget::sheet_mm(
                &bb,
                cfg.scale_denominator,
                cfg.padding_mm,
                Some(cfg.max_width_mm),
            );
            if let Ok(boundary) = compose_boundary(scene, canvas_b, &cfg.parcel_layer) {
                svg_boundary = Some(to_svg(&boundary));
                dimensions_boundary = Some(SheetDimensions {
                    width_mm: canvas_b.width,
                    height_mm: canvas_b.height,
                });
            }
        }
    } else {
        debug!(layer = %cfg.parcel_layer, "no boundary polygons, omitting panel");
    }

    info!(
        entities = scene.entities.len(),
        parcels = parcels.len(),
        boundary = svg_boundary.is_some(),
        "rendered preview"
    );

    Ok(Preview {
        svg_full,
        svg_boundary,
        dimensions,
        dimensions_boundary,
    })
}

/// Positions the two rendered diagrams and the fixed chrome on the
/// 420×297 mm landscape sheet.
pub fn layout_print_page(preview: &Preview, cfg: &PlotConfig) -> PageLayout {
    petabidang_page::layout_page(
        &cfg.title,
        &cfg.scale_legend(),
        (preview.dimensions.width_mm, preview.dimensions.height_mm),
        preview
            .dimensions_boundary
            .map(|d| (d.width_mm, d.height_mm)),
        cfg.units_per_inch,
    )
}

/// Parcel polygons reprojected to WGS84, tagged with the source drawing,
/// as a GeoJSON feature collection for the map overlay.
pub fn export_geo(scene: &Scene, drawing_id: &str, cfg: &PlotConfig) -> Value {
    let polygons = extract_geo_polygons(scene, &cfg.parcel_layer, &TM3_ZONE_49_1);
    debug!(polygons = polygons.len(), "extracted boundary polygons");
    feature_collection(&polygons, drawing_id)
}
