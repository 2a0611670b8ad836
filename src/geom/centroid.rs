use geo::{Centroid, Geometry, LineString, MultiPolygon, Point};
use serde::{Deserialize, Serialize};

use super::ring::{signed_area, vertex_mean};

/// How a representative point is derived from an areal geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CentroidMethod {
    /// Mean of the outer ring's vertices (of the largest outer ring, for MultiPolygons).
    #[default]
    VertexMean,
    /// True area-weighted centroid.
    AreaWeighted,
}

/// Representative point of a geometry, or `None` if the geometry type has no centroid here.
///
/// Only Point, Polygon and MultiPolygon geometries resolve; every other type is
/// excluded from centroid-dependent computations by its caller.
pub fn centroid(geometry: &Geometry<f64>, method: CentroidMethod) -> Option<Point<f64>> {
    match (geometry, method) {
        (Geometry::Point(point), _) => Some(*point),
        (Geometry::Polygon(polygon), CentroidMethod::VertexMean) => vertex_mean(polygon.exterior()),
        (Geometry::MultiPolygon(mp), CentroidMethod::VertexMean) => largest_outer_ring(mp).and_then(vertex_mean),
        (Geometry::Polygon(polygon), CentroidMethod::AreaWeighted) => polygon.centroid(),
        (Geometry::MultiPolygon(mp), CentroidMethod::AreaWeighted) => mp.centroid(),
        _ => None,
    }
}

/// Outer ring with the largest absolute shoelace area; the first ring wins ties.
pub(crate) fn largest_outer_ring(mp: &MultiPolygon<f64>) -> Option<&LineString<f64>> {
    let mut largest = mp.0.first()?.exterior();
    let mut max_area = 0.0;
    for polygon in &mp.0 {
        let area = signed_area(polygon.exterior()).abs();
        if area > max_area {
            max_area = area;
            largest = polygon.exterior();
        }
    }
    Some(largest)
}

#[cfg(test)]
mod tests {
    use geo::{Coord, Line, Polygon};

    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        Polygon::new(
            LineString(vec![
                Coord { x: x0, y: y0 },
                Coord { x: x1, y: y0 },
                Coord { x: x1, y: y1 },
                Coord { x: x0, y: y1 },
            ]),
            vec![],
        )
    }

    #[test]
    fn point_is_its_own_centroid() {
        let p = Point::new(-75.19, 39.95);
        assert_eq!(centroid(&Geometry::Point(p), CentroidMethod::VertexMean), Some(p));
        assert_eq!(centroid(&Geometry::Point(p), CentroidMethod::AreaWeighted), Some(p));
    }

    #[test]
    fn square_polygon() {
        // Polygon::new closes the ring, and the closing vertex is averaged too.
        let square = Geometry::Polygon(rect(0.0, 0.0, 2.0, 2.0));
        assert_eq!(centroid(&square, CentroidMethod::VertexMean), Some(Point::new(0.8, 0.8)));
        let area = centroid(&square, CentroidMethod::AreaWeighted).unwrap();
        assert!((area.x() - 1.0).abs() < 1e-12 && (area.y() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn vertex_mean_differs_from_area_weighted() {
        // Extra vertices along the bottom edge pull the vertex mean down.
        let polygon = Geometry::Polygon(Polygon::new(
            LineString(vec![
                Coord { x: 0.0, y: 0.0 },
                Coord { x: 1.0, y: 0.0 },
                Coord { x: 2.0, y: 0.0 },
                Coord { x: 3.0, y: 0.0 },
                Coord { x: 4.0, y: 0.0 },
                Coord { x: 4.0, y: 4.0 },
                Coord { x: 0.0, y: 4.0 },
            ]),
            vec![],
        ));
        let mean = centroid(&polygon, CentroidMethod::VertexMean).unwrap();
        let area = centroid(&polygon, CentroidMethod::AreaWeighted).unwrap();
        assert!((area.y() - 2.0).abs() < 1e-9);
        assert!(mean.y() < area.y());
    }

    #[test]
    fn multipolygon_uses_largest_ring_only() {
        let mp = Geometry::MultiPolygon(MultiPolygon(vec![
            rect(10.0, 10.0, 11.0, 11.0),
            rect(0.0, 0.0, 4.0, 4.0),
            rect(20.0, 20.0, 22.0, 22.0),
        ]));
        assert_eq!(centroid(&mp, CentroidMethod::VertexMean), Some(Point::new(1.6, 1.6)));
    }

    #[test]
    fn multipolygon_tie_keeps_first() {
        let mp = MultiPolygon(vec![rect(0.0, 0.0, 2.0, 2.0), rect(5.0, 5.0, 7.0, 7.0)]);
        assert_eq!(largest_outer_ring(&mp), Some(mp.0[0].exterior()));
    }

    #[test]
    fn empty_multipolygon_has_no_centroid() {
        let mp = Geometry::MultiPolygon(MultiPolygon::<f64>(vec![]));
        assert_eq!(centroid(&mp, CentroidMethod::VertexMean), None);
    }

    #[test]
    fn other_types_have_no_centroid() {
        let line = Geometry::LineString(LineString(vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
        ]));
        assert_eq!(centroid(&line, CentroidMethod::VertexMean), None);
        let segment = Geometry::Line(Line::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }));
        assert_eq!(centroid(&segment, CentroidMethod::AreaWeighted), None);
    }
}
