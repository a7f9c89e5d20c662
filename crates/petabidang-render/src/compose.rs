use petabidang_scene::{extent_of, Scene};

use crate::markup::{MarkupPrimitive, RenderResult, BLACK};
use crate::overlay::{overlay_labels, ParcelRecord};
use crate::render::render_entities;
use crate::transform::{CanvasBudget, FitTransform};

/// Layer carrying parcel boundary polygons.
pub const PARCEL_LAYER: &str = "BIDANG";

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("scene has no renderable geometry")]
    EmptyScene,
    #[error("no closed boundary polygons on layer {0:?}")]
    NoBoundaryLayer(String),
}

/// Full-scene render with parcel labels. Derives its own extent and fit;
/// it is not geometrically aligned with the boundary-only render.
pub fn compose_main(
    scene: &Scene,
    canvas: CanvasBudget,
    layer: &str,
    parcels: &[ParcelRecord],
) -> Result<RenderResult, ComposeError> {
    let bbox = extent_of(&scene.entities).ok_or(ComposeError::EmptyScene)?;
    let t = FitTransform::fit(&bbox, &canvas);

    let mut primitives = render_entities(&scene.entities, &t);
    primitives.extend(overlay_labels(scene, layer, parcels, &t));

    Ok(RenderResult {
        primitives,
        canvas_width: canvas.width,
        canvas_height: canvas.height,
    })
}

/// Boundary-only render: closed parcel polygons stroked black, no base
/// drawing, no labels, independently fit to its own canvas.
pub fn compose_boundary(
    scene: &Scene,
    canvas: CanvasBudget,
    layer: &str,
) -> Result<RenderResult, ComposeError> {
    let bbox = extent_of(scene.boundary_entities(layer))
        .ok_or_else(|| ComposeError::NoBoundaryLayer(layer.to_string()))?;
    let t = FitTransform::fit(&bbox, &canvas);

    let primitives = scene
        .boundaries(layer)
        .map(|poly| MarkupPrimitive::Polyline {
            points: poly.vertices.iter().map(|v| t.apply(v.point())).collect(),
            closed: true,
            stroke: BLACK,
        })
        .collect();

    Ok(RenderResult {
        primitives,
        canvas_width: canvas.width,
        canvas_height: canvas.height,
    })
}
