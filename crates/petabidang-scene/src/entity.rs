use serde::{Deserialize, Serialize};

/// A 2D point in drawing coordinates (meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A polyline vertex. The parser may carry an elevation; the pipeline
/// ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Vertex {
    pub fn point(&self) -> Point2 {
        Point2 {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    #[serde(default)]
    pub layer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    pub start: Point2,
    pub end: Point2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    #[serde(default)]
    pub layer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    #[serde(default)]
    pub layer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    pub center: Point2,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arc {
    #[serde(default)]
    pub layer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    pub center: Point2,
    pub radius: f64,
    /// Start angle in radians, counter-clockwise from east.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    pub layer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    pub anchor: Point2,
    pub height: f64,
    /// Rotation in degrees, counter-clockwise in drawing space.
    #[serde(default)]
    pub rotation: f64,
    pub content: String,
}

/// One drawing entity. The set is closed: the external CAD parser only
/// hands back these five kinds, tagged the way the source format names
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    #[serde(rename = "LINE")]
    Line(Line),
    #[serde(rename = "LWPOLYLINE", alias = "POLYLINE")]
    Polyline(Polyline),
    #[serde(rename = "CIRCLE")]
    Circle(Circle),
    #[serde(rename = "ARC")]
    Arc(Arc),
    #[serde(rename = "TEXT")]
    Text(Text),
}

impl Entity {
    pub fn layer(&self) -> &str {
        match self {
            Entity::Line(e) => &e.layer,
            Entity::Polyline(e) => &e.layer,
            Entity::Circle(e) => &e.layer,
            Entity::Arc(e) => &e.layer,
            Entity::Text(e) => &e.layer,
        }
    }

    pub fn color(&self) -> Option<u32> {
        match self {
            Entity::Line(e) => e.color,
            Entity::Polyline(e) => e.color,
            Entity::Circle(e) => e.color,
            Entity::Arc(e) => e.color,
            Entity::Text(e) => e.color,
        }
    }
}

/// Layer names compare trimmed and case-insensitively.
pub fn layer_matches(layer: &str, query: &str) -> bool {
    layer.trim().eq_ignore_ascii_case(query.trim())
}

/// The full parsed drawing, in parse order. Never mutated after parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub entities: Vec<Entity>,
}

impl Scene {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Closed polylines on the given layer, in encounter order. These are
    /// the parcel boundary candidates for overlays, boundary-only renders
    /// and geographic export.
    pub fn boundaries<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a Polyline> + 'a {
        self.entities.iter().filter_map(move |e| match e {
            Entity::Polyline(p)
                if p.closed && !p.vertices.is_empty() && layer_matches(&p.layer, layer) =>
            {
                Some(p)
            }
            _ => None,
        })
    }

    /// Entities belonging to boundary polylines only, for extent filtering.
    pub fn boundary_entities<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities.iter().filter(move |e| match e {
            Entity::Polyline(p) => {
                p.closed && !p.vertices.is_empty() && layer_matches(&p.layer, layer)
            }
            _ => false,
        })
    }
}
