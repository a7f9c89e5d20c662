use std::fmt;

use petabidang_scene::Point2;

/// A resolved 24-bit stroke/fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

pub const BLACK: Rgb = Rgb(0);

impl Rgb {
    /// Resolves a raw drawing color. Palette index 0 and 256 are both
    /// "by layer/by block" defaults and render black; any other positive
    /// value is a packed 24-bit RGB.
    pub fn resolve(raw: Option<u32>) -> Rgb {
        match raw {
            Some(c) if c > 0 && c != 256 => Rgb(c & 0x00FF_FFFF),
            _ => BLACK,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchored at the text start, alphabetic baseline (drawing text).
    Start,
    /// Centered both ways (overlay labels).
    Middle,
}

/// One piece of resolved 2D markup in canvas coordinates.
#[derive(Debug, Clone)]
pub enum MarkupPrimitive {
    Segment {
        a: Point2,
        b: Point2,
        stroke: Rgb,
    },
    Polyline {
        points: Vec<Point2>,
        /// Closed polylines are only emitted by the boundary-only render;
        /// the main render strokes every polyline open.
        closed: bool,
        stroke: Rgb,
    },
    Circle {
        center: Point2,
        radius: f64,
        stroke: Rgb,
    },
    ArcPath {
        start: Point2,
        end: Point2,
        radius: f64,
        large_arc: bool,
        sweep: bool,
        stroke: Rgb,
    },
    Label {
        position: Point2,
        content: String,
        font_size: f64,
        /// Canvas-space rotation in degrees (already negated for the
        /// Y-flip), applied about the anchor.
        rotation: f64,
        fill: Rgb,
        anchor: TextAnchor,
    },
}

/// Output of one render pass. Created per call, serialized or rasterized
/// immediately, never persisted.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub primitives: Vec<MarkupPrimitive>,
    pub canvas_width: f64,
    pub canvas_height: f64,
}
