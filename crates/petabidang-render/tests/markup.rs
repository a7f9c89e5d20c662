use std::f64::consts::PI;

use petabidang_render::render::render_entities;
use petabidang_render::svg::{escape_xml, fmt_num, to_svg};
use petabidang_render::{CanvasBudget, FitTransform, MarkupPrimitive, RenderResult, Rgb, TextAnchor};
use petabidang_scene::{Arc, BoundingBox, Circle, Entity, Point2, Text};

/// Unit scale with the canvas Y-flip: (x, y) -> (x, 100 - y).
fn unit_transform() -> FitTransform {
    let bb = BoundingBox {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 100.0,
        max_y: 100.0,
    };
    FitTransform::fit(&bb, &CanvasBudget::new(100.0, 100.0, 0.0))
}

fn arc(start_angle: f64, end_angle: f64) -> Entity {
    Entity::Arc(Arc {
        layer: String::new(),
        color: None,
        center: Point2::new(50.0, 50.0),
        radius: 10.0,
        start_angle,
        end_angle,
    })
}

fn arc_flags(start_angle: f64, end_angle: f64) -> (bool, bool) {
    let out = render_entities(&[arc(start_angle, end_angle)], &unit_transform());
    match &out[0] {
        MarkupPrimitive::ArcPath {
            large_arc, sweep, ..
        } => (*large_arc, *sweep),
        other => panic!("expected arc path, got {other:?}"),
    }
}

#[test]
fn arc_flags_follow_the_angle_span() {
    assert_eq!(arc_flags(0.0, PI / 2.0), (false, true));
    assert_eq!(arc_flags(0.0, 3.0 * PI / 2.0), (true, true));
    assert_eq!(arc_flags(PI, 0.0), (true, false));
}

#[test]
fn arc_endpoints_flip_the_sine_term() {
    let out = render_entities(&[arc(0.0, PI / 2.0)], &unit_transform());
    let MarkupPrimitive::ArcPath { start, end, .. } = &out[0] else {
        panic!("expected arc path");
    };
    // Center (50,50) maps to (50,50); start angle 0 is due east, end angle
    // π/2 points up in world space, which is up (smaller y) on the canvas.
    assert!((start.x - 60.0).abs() < 1e-9 && (start.y - 50.0).abs() < 1e-9);
    assert!((end.x - 50.0).abs() < 1e-9 && (end.y - 40.0).abs() < 1e-9);
}

#[test]
fn palette_defaults_and_packed_rgb_resolve() {
    assert_eq!(Rgb::resolve(None).to_string(), "#000000");
    assert_eq!(Rgb::resolve(Some(0)).to_string(), "#000000");
    assert_eq!(Rgb::resolve(Some(256)).to_string(), "#000000");
    assert_eq!(Rgb::resolve(Some(0xFF0000)).to_string(), "#ff0000");
    assert_eq!(Rgb::resolve(Some(255)).to_string(), "#0000ff");
}

#[test]
fn circle_radius_scales_with_the_transform() {
    let circle = Entity::Circle(Circle {
        layer: String::new(),
        color: Some(0xFF0000),
        center: Point2::new(50.0, 50.0),
        radius: 7.0,
    });
    let out = render_entities(&[circle], &unit_transform());
    match &out[0] {
        MarkupPrimitive::Circle { radius, stroke, .. } => {
            assert!((radius - 7.0).abs() < 1e-12);
            assert_eq!(stroke.to_string(), "#ff0000");
        }
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn text_becomes_a_start_anchored_label_with_negated_rotation() {
    let text = Entity::Text(Text {
        layer: String::new(),
        color: None,
        anchor: Point2::new(10.0, 20.0),
        height: 1.5,
        rotation: 30.0,
        content: "P.1".to_string(),
    });
    let out = render_entities(&[text], &unit_transform());
    match &out[0] {
        MarkupPrimitive::Label {
            position,
            font_size,
            rotation,
            anchor,
            ..
        } => {
            assert!((position.y - 80.0).abs() < 1e-12);
            assert!((font_size - 2.0).abs() < 1e-12, "floored to minimum");
            assert_eq!(*rotation, -30.0);
            assert_eq!(*anchor, TextAnchor::Start);
        }
        other => panic!("expected label, got {other:?}"),
    }
}

#[test]
fn svg_serializes_shapes_and_text_into_separate_groups() {
    let result = RenderResult {
        primitives: vec![
            MarkupPrimitive::Segment {
                a: Point2::new(0.0, 0.0),
                b: Point2::new(10.0, 10.0),
                stroke: Rgb(0),
            },
            MarkupPrimitive::Polyline {
                points: vec![Point2::new(0.0, 0.0), Point2::new(5.0, 0.0), Point2::new(5.0, 5.0)],
                closed: true,
                stroke: Rgb(0),
            },
            MarkupPrimitive::Label {
                position: Point2::new(2.0, 3.0),
                content: "A & B <2>".to_string(),
                font_size: 4.0,
                rotation: 0.0,
                fill: Rgb(0),
                anchor: TextAnchor::Middle,
            },
        ],
        canvas_width: 40.0,
        canvas_height: 24.0,
    };

    let svg = to_svg(&result);
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"40\" height=\"24\" viewBox=\"0 0 40 24\">"));
    assert!(svg.contains("<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"10\""));
    assert!(svg.contains("<polygon points=\"0,0 5,0 5,5\""));
    assert!(svg.contains("A &amp; B &lt;2&gt;"));
    assert!(svg.contains("text-anchor=\"middle\""));
    assert!(!svg.contains("transform=\"rotate"), "no rotation attribute for 0°");
}

#[test]
fn open_polylines_serialize_as_polyline_elements() {
    let result = RenderResult {
        primitives: vec![MarkupPrimitive::Polyline {
            points: vec![Point2::new(1.5, 2.0), Point2::new(3.0, 4.0)],
            closed: false,
            stroke: Rgb(0xFF0000),
        }],
        canvas_width: 10.0,
        canvas_height: 10.0,
    };
    let svg = to_svg(&result);
    assert!(svg.contains("<polyline points=\"1.5,2 3,4\" fill=\"none\" stroke=\"#ff0000\""));
    assert!(!svg.contains("<polygon"));
}

#[test]
fn number_and_xml_helpers_match_the_markup_contract() {
    assert_eq!(fmt_num(8.0), "8");
    assert_eq!(fmt_num(8.25), "8.25");
    assert_eq!(fmt_num(-0.0000000001), "0");
    assert_eq!(escape_xml("a\"b&c"), "a&quot;b&amp;c");
}
