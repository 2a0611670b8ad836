use geo::{Coord, LineString, Point};

/// Vertices of a ring without the closing duplicate of the first vertex.
#[inline]
pub(crate) fn open_vertices(ring: &LineString<f64>) -> &[Coord<f64>] {
    match ring.0.as_slice() {
        [first, rest @ .., last] if !rest.is_empty() && first == last => &ring.0[..ring.0.len() - 1],
        coords => coords,
    }
}

/// Get the signed area of a ring by the shoelace formula (sign follows orientation).
pub fn signed_area(ring: &LineString<f64>) -> f64 {
    let pts = open_vertices(ring);
    if pts.len() < 3 { return 0.0 }

    let mut a = 0.0;
    for (i, p) in pts.iter().enumerate() {
        let q = pts[(i + 1) % pts.len()];
        a += p.x * q.y - q.x * p.y;
    }
    a / 2.0
}

/// Arithmetic mean of every position in a ring, the closing repeat of the first
/// vertex included, so a closed ring is pulled toward its first vertex.
/// This is not the area-weighted centroid; it is biased toward densely sampled edges.
pub fn vertex_mean(ring: &LineString<f64>) -> Option<Point<f64>> {
    let pts = ring.0.as_slice();
    if pts.is_empty() { return None }

    let (sx, sy) = pts.iter().fold((0.0, 0.0), |(sx, sy), c| (sx + c.x, sy + c.y));
    let n = pts.len() as f64;
    Some(Point::new(sx / n, sy / n))
}

/// Even-odd ray casting test of `point` against a single ring.
///
/// The ray runs along +x. An edge counts as crossed when exactly one of its endpoints
/// lies strictly above the ray, so a vertex shared by two edges is counted once.
pub fn point_in_ring(point: Point<f64>, ring: &LineString<f64>) -> bool {
    let pts = open_vertices(ring);
    let (x, y) = (point.x(), point.y());

    let mut inside = false;
    let mut j = pts.len().wrapping_sub(1);
    for i in 0..pts.len() {
        let (pi, pj) = (pts[i], pts[j]);
        if (pi.y > y) != (pj.y > y)
            && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(closed: bool) -> LineString<f64> {
        let mut coords = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 2.0, y: 0.0 },
            Coord { x: 2.0, y: 2.0 },
            Coord { x: 0.0, y: 2.0 },
        ];
        if closed { coords.push(coords[0]) }
        LineString(coords)
    }

    #[test]
    fn vertex_mean_counts_closing_vertex() {
        assert_eq!(vertex_mean(&square(false)), Some(Point::new(1.0, 1.0)));
        // (0 + 2 + 2 + 0 + 0) / 5
        assert_eq!(vertex_mean(&square(true)), Some(Point::new(0.8, 0.8)));
    }

    #[test]
    fn vertex_mean_of_empty_ring() {
        assert_eq!(vertex_mean(&LineString(vec![])), None);
    }

    #[test]
    fn signed_area_follows_orientation() {
        let ccw = square(true);
        let mut cw = ccw.clone();
        cw.0.reverse();
        assert_eq!(signed_area(&ccw), 4.0);
        assert_eq!(signed_area(&cw), -4.0);
        assert_eq!(signed_area(&square(false)), 4.0);
    }

    #[test]
    fn degenerate_ring_has_no_area() {
        let line = LineString(vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }]);
        assert_eq!(signed_area(&line), 0.0);
    }

    #[test]
    fn point_in_square() {
        let ring = square(true);
        assert!(point_in_ring(Point::new(1.0, 1.0), &ring));
        assert!(point_in_ring(Point::new(0.5, 1.9), &ring));
        assert!(!point_in_ring(Point::new(3.0, 1.0), &ring));
        assert!(!point_in_ring(Point::new(-0.1, 1.0), &ring));
        assert!(!point_in_ring(Point::new(1.0, 2.5), &ring));
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // Diamond with vertices level with the test point on both sides.
        let ring = LineString(vec![
            Coord { x: 0.0, y: 1.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 2.0, y: 1.0 },
            Coord { x: 1.0, y: 2.0 },
            Coord { x: 0.0, y: 1.0 },
        ]);
        assert!(point_in_ring(Point::new(1.0, 1.0), &ring));
        assert!(!point_in_ring(Point::new(-1.0, 1.0), &ring));
        assert!(!point_in_ring(Point::new(3.0, 1.0), &ring));
    }

    #[test]
    fn empty_ring_contains_nothing() {
        assert!(!point_in_ring(Point::new(0.0, 0.0), &LineString(vec![])));
    }
}
