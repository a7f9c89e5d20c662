//! Scene model and extent calculation for parsed survey drawings.

pub mod entity;
pub mod extent;

pub use entity::{Arc, Circle, Entity, Line, Point2, Polyline, Scene, Text, Vertex};
pub use extent::{extent_of, BoundingBox};
