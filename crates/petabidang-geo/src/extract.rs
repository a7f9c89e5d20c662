use serde::Serialize;
use serde_json::{json, Value};

use petabidang_scene::Scene;

use crate::tm3::{grid_to_lon_lat, TmZone};

/// A parcel polygon in geographic coordinates. The exterior ring is
/// closed (first vertex repeated at the end); holes are not supported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPolygon {
    /// (longitude, latitude) pairs in degrees.
    pub exterior: Vec<(f64, f64)>,
}

impl GeoPolygon {
    /// GeoJSON `Polygon` geometry.
    pub fn to_geojson(&self) -> Value {
        let ring: Vec<[f64; 2]> = self.exterior.iter().map(|&(lon, lat)| [lon, lat]).collect();
        json!({ "type": "Polygon", "coordinates": [ring] })
    }
}

/// Reprojects every closed boundary polyline on `layer` to WGS84, in
/// encounter order. Rings with fewer than 3 source vertices are skipped;
/// closure is enforced by appending the first vertex when the ring comes
/// back open.
pub fn extract_geo_polygons(scene: &Scene, layer: &str, zone: &TmZone) -> Vec<GeoPolygon> {
    let mut polygons = Vec::new();

    for poly in scene.boundaries(layer) {
        if poly.vertices.len() < 3 {
            continue;
        }

        let mut ring: Vec<(f64, f64)> = poly
            .vertices
            .iter()
            .map(|v| grid_to_lon_lat(zone, v.x, v.y))
            .collect();

        let first = ring[0];
        let last = ring[ring.len() - 1];
        if first.0 != last.0 || first.1 != last.1 {
            ring.push(first);
        }

        polygons.push(GeoPolygon { exterior: ring });
    }

    polygons
}

/// GeoJSON `FeatureCollection` tagged with the source drawing identifier,
/// ready for the map overlay layer.
pub fn feature_collection(polygons: &[GeoPolygon], drawing_id: &str) -> Value {
    let features: Vec<Value> = polygons
        .iter()
        .map(|p| {
            json!({
                "type": "Feature",
                "properties": { "drawing_id": drawing_id },
                "geometry": p.to_geojson(),
            })
        })
        .collect();
    json!({ "type": "FeatureCollection", "features": features })
}
