use crate::entity::{Entity, Point2};

/// Axis-aligned bounding box in drawing coordinates. Only constructed
/// non-empty; an extent with no contributing geometry is `None` at the
/// `extent_of` level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn mid_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }
}

#[derive(Debug, Clone, Copy)]
struct Accum {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    has_point: bool,
}

impl Accum {
    fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
            has_point: false,
        }
    }

    fn add(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.has_point = true;
    }

    fn finish(self) -> Option<BoundingBox> {
        if !self.has_point {
            return None;
        }
        Some(BoundingBox {
            min_x: self.min_x,
            min_y: self.min_y,
            max_x: self.max_x,
            max_y: self.max_y,
        })
    }
}

/// Rough width of a text entity: height * glyph count * 0.6. The box
/// extends up and right from the anchor.
fn text_box(anchor: Point2, height: f64, content: &str) -> (Point2, Point2) {
    let w = height * content.chars().count() as f64 * 0.6;
    (anchor, Point2::new(anchor.x + w, anchor.y + height))
}

/// Extent over any entity subset. Circles and arcs contribute the full
/// bounding square of the radius; the arc's angular span is ignored on
/// purpose (legacy behavior the printed sheet sizes depend on).
pub fn extent_of<'a, I>(entities: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let mut acc = Accum::new();

    for entity in entities {
        match entity {
            Entity::Line(line) => {
                acc.add(line.start.x, line.start.y);
                acc.add(line.end.x, line.end.y);
            }
            Entity::Polyline(poly) => {
                for v in &poly.vertices {
                    acc.add(v.x, v.y);
                }
            }
            Entity::Circle(circle) => {
                let r = circle.radius.abs();
                acc.add(circle.center.x - r, circle.center.y - r);
                acc.add(circle.center.x + r, circle.center.y + r);
            }
            Entity::Arc(arc) => {
                let r = arc.radius.abs();
                acc.add(arc.center.x - r, arc.center.y - r);
                acc.add(arc.center.x + r, arc.center.y + r);
            }
            Entity::Text(text) => {
                let (lo, hi) = text_box(text.anchor, text.height, &text.content);
                acc.add(lo.x, lo.y);
                acc.add(hi.x, hi.y);
            }
        }
    }

    acc.finish()
}
