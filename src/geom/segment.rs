use geo::{Coord, Geometry, LineString, Point};

use super::distance::haversine_distance;

/// Distance in meters from `point` to the segment `start`-`end`.
///
/// The projection is computed in raw lon/lat space as if it were planar, which only holds
/// at city scale; the distance to the projected point is then measured on the sphere.
pub fn point_to_segment_distance(point: Point<f64>, start: Coord<f64>, end: Coord<f64>) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx == 0.0 && dy == 0.0 {
        return haversine_distance(point, start.into());
    }

    let t = (((point.x() - start.x) * dx + (point.y() - start.y) * dy) / (dx * dx + dy * dy))
        .clamp(0.0, 1.0);

    haversine_distance(point, Point::new(start.x + t * dx, start.y + t * dy))
}

/// Minimum segment distance along a polyline; infinite if it has fewer than two vertices.
pub fn point_to_polyline_distance(point: Point<f64>, polyline: &LineString<f64>) -> f64 {
    polyline.lines()
        .map(|line| point_to_segment_distance(point, line.start, line.end))
        .fold(f64::INFINITY, f64::min)
}

/// Distance to a linear geometry (LineString or MultiLineString), or `None` for other types.
pub fn point_to_linear_distance(point: Point<f64>, geometry: &Geometry<f64>) -> Option<f64> {
    match geometry {
        Geometry::LineString(ls) => Some(point_to_polyline_distance(point, ls)),
        Geometry::MultiLineString(mls) => Some(mls.0.iter()
            .map(|ls| point_to_polyline_distance(point, ls))
            .fold(f64::INFINITY, f64::min)),
        Geometry::Line(line) => Some(point_to_segment_distance(point, line.start, line.end)),
        _ => None,
    }
}
