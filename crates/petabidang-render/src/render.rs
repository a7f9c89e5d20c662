use std::f64::consts::PI;

use petabidang_scene::{Entity, Point2};

use crate::markup::{MarkupPrimitive, Rgb, TextAnchor};
use crate::transform::FitTransform;

/// Converts every entity into canvas-space markup. Closed polylines are
/// stroked open here; the boundary-only composer handles the filled-polygon
/// presentation separately.
pub fn render_entities(entities: &[Entity], t: &FitTransform) -> Vec<MarkupPrimitive> {
    let mut out = Vec::with_capacity(entities.len());

    for entity in entities {
        let stroke = Rgb::resolve(entity.color());
        match entity {
            Entity::Line(line) => {
                out.push(MarkupPrimitive::Segment {
                    a: t.apply(line.start),
                    b: t.apply(line.end),
                    stroke,
                });
            }
            Entity::Polyline(poly) => {
                if poly.vertices.is_empty() {
                    continue;
                }
                let points = poly.vertices.iter().map(|v| t.apply(v.point())).collect();
                out.push(MarkupPrimitive::Polyline {
                    points,
                    closed: false,
                    stroke,
                });
            }
            Entity::Circle(circle) => {
                out.push(MarkupPrimitive::Circle {
                    center: t.apply(circle.center),
                    radius: (circle.radius * t.scale).abs(),
                    stroke,
                });
            }
            Entity::Arc(arc) => {
                out.push(arc_path(arc, t, stroke));
            }
            Entity::Text(text) => {
                out.push(MarkupPrimitive::Label {
                    position: t.apply(text.anchor),
                    content: text.content.clone(),
                    font_size: (text.height * t.scale).max(2.0),
                    // The Y-flip inverts the rotation sense.
                    rotation: -text.rotation,
                    fill: stroke,
                    anchor: TextAnchor::Start,
                });
            }
        }
    }

    out
}

/// Arc endpoints are computed in canvas space around the transformed
/// center, with the Y-flip folded into the sine term. Flags come straight
/// from the raw radian angles: the sweep direction from their order, the
/// large-arc bit from a span of π or more.
fn arc_path(arc: &petabidang_scene::Arc, t: &FitTransform, stroke: Rgb) -> MarkupPrimitive {
    let center = t.apply(arc.center);
    let r = (arc.radius * t.scale).abs();
    let start = Point2 {
        x: center.x + r * arc.start_angle.cos(),
        y: center.y - r * arc.start_angle.sin(),
    };
    let end = Point2 {
        x: center.x + r * arc.end_angle.cos(),
        y: center.y - r * arc.end_angle.sin(),
    };
    MarkupPrimitive::ArcPath {
        start,
        end,
        radius: r,
        large_arc: (arc.end_angle - arc.start_angle).abs() >= PI,
        sweep: arc.end_angle >= arc.start_angle,
        stroke,
    }
}
