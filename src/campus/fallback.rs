use geo::{Geometry, Point};

use crate::layers::Feature;

/// Minimal campus points used when the universities collection is missing or empty.
const FALLBACK_CAMPUSES: [(&str, f64, f64); 3] = [
    ("University of Pennsylvania", -75.193213, 39.952218),
    ("Drexel University", -75.189, 39.956),
    ("Temple University", -75.157, 39.981),
];

/// University features for the built-in fallback campuses.
pub fn fallback_campus_features() -> Vec<Feature> {
    FALLBACK_CAMPUSES.iter()
        .map(|&(name, lon, lat)| Feature::new(Geometry::Point(Point::new(lon, lat))).with_property("name", name))
        .collect()
}
