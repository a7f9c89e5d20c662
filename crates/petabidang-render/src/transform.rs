use petabidang_scene::{BoundingBox, Point2};

/// Target canvas for one render. Units are whatever the caller wants the
/// markup expressed in; the print pipeline uses millimeters so the markup
/// doubles as the physical sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBudget {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl CanvasBudget {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Physical sheet size in millimeters for a drawing extent plotted at
    /// 1:`denominator`, then clamped to `max_width` preserving aspect
    /// ratio. The order matters: scale conversion first, ceiling second —
    /// this pair of numbers is what ends up printed on paper.
    pub fn sheet_mm(
        bbox: &BoundingBox,
        denominator: f64,
        padding: f64,
        max_width: Option<f64>,
    ) -> Self {
        let mut width = bbox.width() * 1000.0 / denominator;
        let mut height = bbox.height() * 1000.0 / denominator;
        if let Some(max_w) = max_width {
            if width > max_w {
                let ratio = max_w / width;
                width = max_w;
                height *= ratio;
            }
        }
        Self {
            width,
            height,
            padding,
        }
    }
}

/// Isotropic world → canvas map: scale to fit inside the padded canvas,
/// center the extent midpoint on the canvas midpoint, flip Y (world is
/// Y-up, markup is Y-down).
#[derive(Debug, Clone, Copy)]
pub struct FitTransform {
    pub scale: f64,
    origin_page: Point2,
    origin_world: Point2,
}

impl FitTransform {
    pub fn fit(bbox: &BoundingBox, canvas: &CanvasBudget) -> Self {
        // Degenerate extents are floored to one unit so a single point or a
        // horizontal/vertical run still produces a usable scale.
        let dx = if bbox.width() == 0.0 { 1.0 } else { bbox.width() };
        let dy = if bbox.height() == 0.0 { 1.0 } else { bbox.height() };

        let scale = ((canvas.width - 2.0 * canvas.padding) / dx)
            .min((canvas.height - 2.0 * canvas.padding) / dy);

        Self {
            scale,
            origin_page: Point2::new(canvas.width / 2.0, canvas.height / 2.0),
            origin_world: Point2::new(bbox.mid_x(), bbox.mid_y()),
        }
    }

    pub fn apply(&self, p: Point2) -> Point2 {
        Point2 {
            x: self.origin_page.x + (p.x - self.origin_world.x) * self.scale,
            y: self.origin_page.y - (p.y - self.origin_world.y) * self.scale,
        }
    }
}
