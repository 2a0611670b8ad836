use geo::Point;

use crate::geom::{haversine_distance, nearest_distance, CentroidMethod};
use crate::layers::Feature;

/// Property keys tried, in order, for a neighborhood's display name.
const NAME_KEYS: [&str; 2] = ["LISTNAME", "NAME"];

/// A neighborhood that passed the distance and transit gates for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub index: usize, // Position in the neighborhoods collection
    pub name: String,
    pub centroid: Point<f64>,
    pub campus_distance: f64,
    pub transit_distance: f64,
}

/// Display name of a neighborhood feature.
pub fn neighborhood_name(feature: &Feature) -> &str {
    feature.first_prop_str(&NAME_KEYS).unwrap_or("Unknown")
}

/// Distance from `point` to the nearest Point-geometry stop; infinite if there is none.
pub fn nearest_transit_distance(point: Point<f64>, stops: &[Feature]) -> f64 {
    nearest_distance(point, stops.iter().filter_map(Feature::point))
}

/// Keep neighborhoods whose centroid is within `threshold_m` of the campus AND whose
/// nearest transit stop is within the same threshold. Input order is preserved.
///
/// Neighborhoods without a centroid are skipped. With no stops every transit
/// distance is infinite and nothing passes.
pub fn filter_neighborhoods(
    campus: Point<f64>,
    neighborhoods: &[Feature],
    threshold_m: f64,
    stops: &[Feature],
    method: CentroidMethod,
) -> Vec<Candidate> {
    let mut skipped = 0;
    let candidates: Vec<Candidate> = neighborhoods.iter().enumerate()
        .filter_map(|(index, feature)| {
            let Some(centroid) = feature.centroid(method) else {
                skipped += 1;
                return None;
            };
            let campus_distance = haversine_distance(centroid, campus);
            let transit_distance = nearest_transit_distance(centroid, stops);

            (campus_distance <= threshold_m && transit_distance <= threshold_m).then(|| Candidate {
                index,
                name: neighborhood_name(feature).to_string(),
                centroid,
                campus_distance,
                transit_distance,
            })
        })
        .collect();

    log::debug!(
        "filter: {} of {} neighborhoods within {:.0} m ({} without centroid, {} stops)",
        candidates.len(), neighborhoods.len(), threshold_m, skipped, stops.len(),
    );
    candidates
}

#[cfg(test)]
mod tests {
    use geo::{Coord, Geometry, LineString, Polygon};

    use super::*;

    /// A small square neighborhood centred on (lon, lat).
    fn hood(name: &str, lon: f64, lat: f64) -> Feature {
        let d = 0.001;
        let ring = LineString(vec![
            Coord { x: lon - d, y: lat - d },
            Coord { x: lon + d, y: lat - d },
            Coord { x: lon + d, y: lat + d },
            Coord { x: lon - d, y: lat + d },
        ]);
        Feature::new(Geometry::Polygon(Polygon::new(ring, vec![]))).with_property("NAME", name)
    }

    fn stop(lon: f64, lat: f64) -> Feature {
        Feature::new(Geometry::Point(Point::new(lon, lat)))
    }

    const CAMPUS: (f64, f64) = (-75.19, 39.95);

    fn campus() -> Point<f64> { Point::new(CAMPUS.0, CAMPUS.1) }

    // 0.01 degrees of latitude is about 1112 m.
    fn hoods() -> Vec<Feature> {
        vec![
            hood("Near", CAMPUS.0, CAMPUS.1 + 0.005),
            hood("Mid", CAMPUS.0, CAMPUS.1 - 0.009),
            hood("Far", CAMPUS.0, CAMPUS.1 + 0.03),
            Feature::default().with_property("NAME", "Nowhere"),
        ]
    }

    #[test]
    fn both_gates_must_pass() {
        let stops = [stop(CAMPUS.0, CAMPUS.1 + 0.006)];
        let candidates = filter_neighborhoods(campus(), &hoods(), 1200.0, &stops, CentroidMethod::VertexMean);

        // "Mid" is close to campus but about 1690 m from the only stop.
        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Near"]);
        assert_eq!(candidates[0].index, 0);
    }

    #[test]
    fn gates_hold_for_every_candidate() {
        let stops = [stop(CAMPUS.0, CAMPUS.1), stop(CAMPUS.0, CAMPUS.1 + 0.03)];
        let features = hoods();
        for threshold in [400.0, 800.0, 1200.0, 2400.0, 7500.0] {
            let candidates = filter_neighborhoods(campus(), &features, threshold, &stops, CentroidMethod::VertexMean);
            for candidate in &candidates {
                assert!(candidate.campus_distance <= threshold);
                assert!(candidate.transit_distance <= threshold);
            }
            for (index, feature) in features.iter().enumerate() {
                if candidates.iter().any(|c| c.index == index) { continue }
                let Some(centroid) = feature.centroid(CentroidMethod::VertexMean) else { continue };
                let passes = haversine_distance(centroid, campus()) <= threshold
                    && nearest_transit_distance(centroid, &stops) <= threshold;
                assert!(!passes);
            }
        }
    }

    #[test]
    fn preserves_input_order() {
        let stops = [stop(CAMPUS.0, CAMPUS.1)];
        let candidates = filter_neighborhoods(campus(), &hoods(), 7500.0, &stops, CentroidMethod::VertexMean);
        let indices: Vec<usize> = candidates.iter().map(|c| c.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn no_stops_excludes_everything() {
        let candidates = filter_neighborhoods(campus(), &hoods(), 7500.0, &[], CentroidMethod::VertexMean);
        assert!(candidates.is_empty());
    }

    #[test]
    fn non_point_stops_are_ignored() {
        let line = Feature::new(Geometry::LineString(LineString(vec![
            Coord { x: CAMPUS.0, y: CAMPUS.1 },
            Coord { x: CAMPUS.0, y: CAMPUS.1 + 0.01 },
        ])));
        assert_eq!(nearest_transit_distance(campus(), &[line]), f64::INFINITY);
    }

    #[test]
    fn names_fall_back() {
        let listed = Feature::default().with_property("LISTNAME", "Fishtown - Lower Kensington").with_property("NAME", "FISHTOWN");
        assert_eq!(neighborhood_name(&listed), "Fishtown - Lower Kensington");
        assert_eq!(neighborhood_name(&Feature::default().with_property("NAME", "FISHTOWN")), "FISHTOWN");
        assert_eq!(neighborhood_name(&Feature::default()), "Unknown");
    }
}
