//! Print page placement: positions the rasterized diagrams and the fixed
//! chrome (title, north arrow, scale legend) on a landscape A3 sheet.
//!
//! This crate only does the layout math; the page-document writer that
//! turns the [`PageLayout`] into bytes is an external collaborator.

use serde::Serialize;

pub const PAGE_WIDTH_MM: f64 = 420.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Center points of the fixed slots, in page millimeters.
pub const TITLE_CENTER_MM: (f64, f64) = (315.0, 20.0);
pub const NORTH_ARROW_CENTER_MM: (f64, f64) = (375.0, 20.0);
pub const MAIN_IMAGE_CENTER_MM: (f64, f64) = (315.0, 75.0);
pub const BOUNDARY_IMAGE_CENTER_MM: (f64, f64) = (315.0, 223.0);

/// Raster resolution for the embedded bitmaps.
pub const RASTER_DPI: f64 = 150.0;

/// Point-based page formats use 72 units per inch.
pub const DEFAULT_UNITS_PER_INCH: f64 = 72.0;

pub fn mm_to_units(mm: f64, units_per_inch: f64) -> f64 {
    mm * units_per_inch / 25.4
}

/// Pixel count for a physical size rasterized at `dpi`.
pub fn mm_to_px(mm: f64, dpi: f64) -> u32 {
    (mm / 25.4 * dpi).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSlot {
    Main,
    Boundary,
}

/// A rasterized diagram placed on the page. `left`/`top` anchor the image
/// rectangle by its center point.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedImage {
    pub slot: ImageSlot,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Raster size the compositor should render the markup at.
    pub raster_width_px: u32,
    pub raster_height_px: u32,
}

/// Static chrome: the underlined document title, centered on its slot.
#[derive(Debug, Clone, Serialize)]
pub struct TitleBlock {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub font_size: f64,
    pub text: String,
}

/// Static chrome: north-arrow triangle with the scale legend underneath.
#[derive(Debug, Clone, Serialize)]
pub struct NorthArrow {
    pub apex_x: f64,
    pub apex_y: f64,
    pub half_width: f64,
    pub height: f64,
    pub legend: String,
    pub legend_font_size: f64,
    pub legend_gap: f64,
}

/// Complete description of the printed sheet, in page units.
#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    pub title: TitleBlock,
    pub north_arrow: NorthArrow,
    pub images: Vec<PlacedImage>,
}

fn place_image(
    slot: ImageSlot,
    center_mm: (f64, f64),
    width_mm: f64,
    height_mm: f64,
    units_per_inch: f64,
) -> PlacedImage {
    let width = mm_to_units(width_mm, units_per_inch);
    let height = mm_to_units(height_mm, units_per_inch);
    PlacedImage {
        slot,
        left: mm_to_units(center_mm.0, units_per_inch) - width / 2.0,
        top: mm_to_units(center_mm.1, units_per_inch) - height / 2.0,
        width,
        height,
        raster_width_px: mm_to_px(width_mm, RASTER_DPI),
        raster_height_px: mm_to_px(height_mm, RASTER_DPI),
    }
}

/// Lays out the fixed sheet. `main_mm` and `boundary_mm` are the physical
/// sizes of the two rendered diagrams; a missing boundary render simply
/// leaves its slot empty.
pub fn layout_page(
    title: &str,
    scale_legend: &str,
    main_mm: (f64, f64),
    boundary_mm: Option<(f64, f64)>,
    units_per_inch: f64,
) -> PageLayout {
    let mut images = vec![place_image(
        ImageSlot::Main,
        MAIN_IMAGE_CENTER_MM,
        main_mm.0,
        main_mm.1,
        units_per_inch,
    )];
    if let Some((w, h)) = boundary_mm {
        images.push(place_image(
            ImageSlot::Boundary,
            BOUNDARY_IMAGE_CENTER_MM,
            w,
            h,
            units_per_inch,
        ));
    }

    // Chrome offsets are in page units, matching the issued documents.
    let title_width = 80.0;
    let title = TitleBlock {
        left: mm_to_units(TITLE_CENTER_MM.0, units_per_inch) - title_width / 2.0,
        top: mm_to_units(TITLE_CENTER_MM.1, units_per_inch) - 6.0,
        width: title_width,
        font_size: 12.0,
        text: title.to_string(),
    };

    let north_arrow = NorthArrow {
        apex_x: mm_to_units(NORTH_ARROW_CENTER_MM.0, units_per_inch),
        apex_y: mm_to_units(NORTH_ARROW_CENTER_MM.1, units_per_inch),
        half_width: 7.0,
        height: 9.0,
        legend: scale_legend.to_string(),
        legend_font_size: 8.0,
        legend_gap: 4.0,
    };

    PageLayout {
        width: mm_to_units(PAGE_WIDTH_MM, units_per_inch),
        height: mm_to_units(PAGE_HEIGHT_MM, units_per_inch),
        title,
        north_arrow,
        images,
    }
}
