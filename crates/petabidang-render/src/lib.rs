//! Fit-to-canvas transform, entity-to-markup rendering, parcel label
//! overlay, dual-target composition and SVG serialization.

pub mod compose;
pub mod markup;
pub mod overlay;
pub mod render;
pub mod svg;
pub mod transform;

pub use compose::{compose_boundary, compose_main, ComposeError};
pub use markup::{MarkupPrimitive, RenderResult, Rgb, TextAnchor};
pub use overlay::ParcelRecord;
pub use transform::{CanvasBudget, FitTransform};
