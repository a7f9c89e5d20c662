//! Ellipsoidal transverse Mercator for the single survey grid the firm
//! works in: DGN95 / Indonesia TM-3 zone 49.1 (EPSG:23835), WGS84
//! ellipsoid. Series formulas per Snyder, Map Projections — A Working
//! Manual, USGS PP 1395, eqs. 8-9..8-25.

// WGS84 ellipsoid.
const A: f64 = 6_378_137.0;
const INV_F: f64 = 298.257_223_563;

#[derive(Debug, Clone, Copy)]
pub struct TmZone {
    /// Central meridian, degrees east.
    pub lon_0_deg: f64,
    /// Latitude of origin, degrees north.
    pub lat_0_deg: f64,
    /// Scale factor on the central meridian.
    pub k0: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

/// TM-3 zone 49.1.
pub const TM3_ZONE_49_1: TmZone = TmZone {
    lon_0_deg: 109.5,
    lat_0_deg: 0.0,
    k0: 0.9999,
    false_easting: 200_000.0,
    false_northing: 1_500_000.0,
};

fn e2() -> f64 {
    let f = 1.0 / INV_F;
    f * (2.0 - f)
}

/// Meridian arc length from the equator to `phi`.
fn meridian_arc(phi: f64) -> f64 {
    let e2 = e2();
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    A * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
        - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
        + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
        - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}

/// Inverse projection: grid easting/northing (meters) to (lon, lat) in
/// degrees.
pub fn grid_to_lon_lat(zone: &TmZone, easting: f64, northing: f64) -> (f64, f64) {
    let e2 = e2();
    let ep2 = e2 / (1.0 - e2);
    let lon_0 = zone.lon_0_deg.to_radians();
    let lat_0 = zone.lat_0_deg.to_radians();

    let x = easting - zone.false_easting;
    let m = meridian_arc(lat_0) + (northing - zone.false_northing) / zone.k0;

    // Footpoint latitude.
    let mu = m / (A * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0));
    let sqrt1me2 = (1.0 - e2).sqrt();
    let e1 = (1.0 - sqrt1me2) / (1.0 + sqrt1me2);
    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

    let sin1 = phi1.sin();
    let cos1 = phi1.cos();
    let tan1 = phi1.tan();
    let c1 = ep2 * cos1 * cos1;
    let t1 = tan1 * tan1;
    let n1 = A / (1.0 - e2 * sin1 * sin1).sqrt();
    let r1 = A * (1.0 - e2) / (1.0 - e2 * sin1 * sin1).powf(1.5);
    let d = x / (n1 * zone.k0);

    let lat = phi1
        - (n1 * tan1 / r1)
            * (d * d / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * ep2 - 3.0 * c1 * c1)
                    * d.powi(6)
                    / 720.0);
    let lon = lon_0
        + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                * d.powi(5)
                / 120.0)
            / cos1;

    (lon.to_degrees(), lat.to_degrees())
}

/// Forward projection: (lon, lat) in degrees to grid easting/northing.
pub fn lon_lat_to_grid(zone: &TmZone, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
    let e2 = e2();
    let ep2 = e2 / (1.0 - e2);
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let lon_0 = zone.lon_0_deg.to_radians();
    let lat_0 = zone.lat_0_deg.to_radians();

    let sin = lat.sin();
    let cos = lat.cos();
    let tan = lat.tan();
    let n = A / (1.0 - e2 * sin * sin).sqrt();
    let t = tan * tan;
    let c = ep2 * cos * cos;
    let a_term = (lon - lon_0) * cos;

    let m = meridian_arc(lat);
    let m0 = meridian_arc(lat_0);

    let easting = zone.false_easting
        + zone.k0
            * n
            * (a_term
                + (1.0 - t + c) * a_term.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a_term.powi(5) / 120.0);
    let northing = zone.false_northing
        + zone.k0
            * (m - m0
                + n * tan
                    * (a_term * a_term / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * a_term.powi(4) / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a_term.powi(6)
                            / 720.0));

    (easting, northing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn false_origin_lies_on_the_central_meridian() {
        let (lon, lat) = grid_to_lon_lat(&TM3_ZONE_49_1, 200_000.0, 1_500_000.0);
        assert!((lon - 109.5).abs() < 1e-9, "lon = {lon}");
        // 1500 km north of the latitude of origin is roughly 13.5°N.
        assert!(lat > 13.0 && lat < 14.0, "lat = {lat}");
    }

    #[test]
    fn forward_then_inverse_round_trips() {
        // Points around West Kalimantan, where zone 49.1 applies.
        for &(lon, lat) in &[
            (109.333, -0.03),
            (109.5, 0.0),
            (110.1, 1.2),
            (108.9, -1.5),
        ] {
            let (e, n) = lon_lat_to_grid(&TM3_ZONE_49_1, lon, lat);
            let (lon2, lat2) = grid_to_lon_lat(&TM3_ZONE_49_1, e, n);
            assert!((lon - lon2).abs() < 1e-8, "lon {lon} -> {lon2}");
            assert!((lat - lat2).abs() < 1e-8, "lat {lat} -> {lat2}");
        }
    }

    #[test]
    fn equator_on_central_meridian_hits_the_false_origin() {
        let (e, n) = lon_lat_to_grid(&TM3_ZONE_49_1, 109.5, 0.0);
        assert!((e - 200_000.0).abs() < 1e-6);
        assert!((n - 1_500_000.0).abs() < 1e-6);
    }

    #[test]
    fn northing_grows_with_latitude() {
        let (_, n1) = lon_lat_to_grid(&TM3_ZONE_49_1, 109.5, 0.1);
        let (_, n2) = lon_lat_to_grid(&TM3_ZONE_49_1, 109.5, 0.2);
        assert!(n2 > n1);
        // One degree of latitude is about 110.6 km here.
        assert!((n2 - n1 - 11_057.0).abs() < 60.0);
    }
}
