use petabidang_render::{CanvasBudget, FitTransform};
use petabidang_scene::{BoundingBox, Point2};

fn bbox(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
    BoundingBox {
        min_x,
        min_y,
        max_x,
        max_y,
    }
}

#[test]
fn corners_stay_inside_the_padded_canvas() {
    let bb = bbox(3.0, -7.0, 21.0, 5.0);
    let canvas = CanvasBudget::new(200.0, 120.0, 10.0);
    let t = FitTransform::fit(&bb, &canvas);
    assert!(t.scale > 0.0);

    let eps = 1e-9;
    for (x, y) in [
        (bb.min_x, bb.min_y),
        (bb.min_x, bb.max_y),
        (bb.max_x, bb.min_y),
        (bb.max_x, bb.max_y),
    ] {
        let p = t.apply(Point2::new(x, y));
        assert!(p.x >= 10.0 - eps && p.x <= 190.0 + eps, "x = {}", p.x);
        assert!(p.y >= 10.0 - eps && p.y <= 110.0 + eps, "y = {}", p.y);
    }
}

#[test]
fn square_extent_maps_to_the_expected_corner() {
    // 10 m square, 100x100 canvas, padding 10: scale is exactly 8 and the
    // bottom-left corner lands at (10, 90).
    let bb = bbox(0.0, 0.0, 10.0, 10.0);
    let t = FitTransform::fit(&bb, &CanvasBudget::new(100.0, 100.0, 10.0));
    assert!((t.scale - 8.0).abs() < 1e-12);

    let p = t.apply(Point2::new(0.0, 0.0));
    assert!((p.x - 10.0).abs() < 1e-12);
    assert!((p.y - 90.0).abs() < 1e-12);
}

#[test]
fn y_axis_is_flipped() {
    let bb = bbox(0.0, 0.0, 10.0, 10.0);
    let t = FitTransform::fit(&bb, &CanvasBudget::new(100.0, 100.0, 10.0));
    let above = t.apply(Point2::new(5.0, 8.0));
    let mid = t.apply(Point2::new(5.0, 5.0));
    assert!(above.y < mid.y);
}

#[test]
fn degenerate_extent_is_floored_to_one_unit() {
    // A vertical run has zero width; the scale must still be finite.
    let bb = bbox(5.0, 0.0, 5.0, 10.0);
    let t = FitTransform::fit(&bb, &CanvasBudget::new(100.0, 100.0, 10.0));
    assert!((t.scale - 8.0).abs() < 1e-12);

    // A single point floors both axes.
    let bb = bbox(3.0, 4.0, 3.0, 4.0);
    let t = FitTransform::fit(&bb, &CanvasBudget::new(100.0, 100.0, 10.0));
    assert!((t.scale - 80.0).abs() < 1e-12);
}

#[test]
fn sheet_sizing_converts_at_the_plot_scale() {
    // 10 m at 1:250 is 40 mm; under the ceiling nothing is clamped.
    let canvas = CanvasBudget::sheet_mm(&bbox(0.0, 0.0, 10.0, 6.0), 250.0, 10.0, Some(148.0));
    assert!((canvas.width - 40.0).abs() < 1e-12);
    assert!((canvas.height - 24.0).abs() < 1e-12);
}

#[test]
fn sheet_width_is_clamped_to_the_page_ceiling() {
    // 50 m wide is 200 mm at 1:250; the ceiling shrinks both axes by the
    // same ratio.
    let canvas = CanvasBudget::sheet_mm(&bbox(0.0, 0.0, 50.0, 30.0), 250.0, 10.0, Some(148.0));
    assert!((canvas.width - 148.0).abs() < 1e-12);
    assert!((canvas.height - 120.0 * (148.0 / 200.0)).abs() < 1e-12);
}
