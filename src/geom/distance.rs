use geo::Point;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two (lon, lat) points, by the haversine formula.
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distance from `point` to the nearest of `targets`, or infinity if there are none.
pub fn nearest_distance(point: Point<f64>, targets: impl IntoIterator<Item = Point<f64>>) -> f64 {
    targets.into_iter()
        .map(|target| haversine_distance(point, target))
        .fold(f64::INFINITY, f64::min)
}
