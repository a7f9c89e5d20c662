//! Reprojection of parcel boundaries from the local survey grid to WGS84
//! for the web map overlay.

pub mod extract;
pub mod tm3;

pub use extract::{extract_geo_polygons, feature_collection, GeoPolygon};
pub use tm3::{grid_to_lon_lat, lon_lat_to_grid, TmZone, TM3_ZONE_49_1};
