use serde::{Deserialize, Serialize};

use petabidang_scene::{Point2, Polyline, Scene};

use crate::markup::{MarkupPrimitive, TextAnchor, BLACK};
use crate::transform::FitTransform;

/// Parcel metadata from the relational store, ordered by creation time to
/// line up positionally with the Nth boundary polygon in parse order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelRecord {
    pub identifier: String,
    pub area_m2: f64,
}

/// Mean of the ring vertices. Not the area-weighted centroid; parcels are
/// small and near-convex, and this matches the labels surveyors sign off.
fn ring_centroid(poly: &Polyline) -> Point2 {
    let n = poly.vertices.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for v in &poly.vertices {
        sum_x += v.x;
        sum_y += v.y;
    }
    Point2::new(sum_x / n, sum_y / n)
}

/// Labels each boundary polygon with its parcel identifier and area.
/// Pairing is positional and stops at the shorter list; leftovers on
/// either side are silently unlabeled.
pub fn overlay_labels(
    scene: &Scene,
    layer: &str,
    parcels: &[ParcelRecord],
    t: &FitTransform,
) -> Vec<MarkupPrimitive> {
    let mut out = Vec::new();
    let font_size = (8.0 * t.scale).max(4.0);

    for (poly, record) in scene.boundaries(layer).zip(parcels) {
        let position = t.apply(ring_centroid(poly));

        let identifier = record.identifier.trim();
        if !identifier.is_empty() {
            out.push(MarkupPrimitive::Label {
                position,
                content: identifier.to_string(),
                font_size,
                rotation: 0.0,
                fill: BLACK,
                anchor: TextAnchor::Middle,
            });
        }

        if record.area_m2 > 0.0 {
            out.push(MarkupPrimitive::Label {
                position: Point2::new(position.x, position.y + font_size * 1.2),
                content: format!("L={} m\u{b2}", record.area_m2.round() as i64),
                font_size: font_size * 0.9,
                rotation: 0.0,
                fill: BLACK,
                anchor: TextAnchor::Middle,
            });
        }
    }

    out
}
