use geo::{Geometry, Point};
use serde::Serialize;

use crate::config::ScoringConfig;
use crate::filter::Candidate;
use crate::geom::{haversine_distance, point_to_linear_distance};
use crate::layers::{Feature, Layers};

/// Property keys tried, in order, for an amenity's type tag.
const AMENITY_TYPE_KEYS: [&str; 2] = ["amenity", "shop"];

/// Raw per-candidate measurements, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawMetrics {
    pub campus_distance: f64,
    pub parks_count: usize,
    /// Grocery and restaurant points combined; this is the scored count.
    pub grocery_count: usize,
    /// Points tagged as grocery (supermarket, grocery).
    pub supermarket_count: usize,
    pub restaurant_count: usize,
    /// Distance to the nearest bike lane; infinite when there is none.
    pub bike_distance: f64,
    /// `max(0, 1 - bike_distance / decay)`.
    pub bike_access: f64,
    pub transit_distance: f64,
}

/// Amenity layers prepared once per scoring pass.
pub(crate) struct Surroundings<'a> {
    parks: Vec<Point<f64>>,
    amenities: Vec<(Point<f64>, bool)>, // (location, is grocery)
    bike_lanes: Vec<&'a Geometry<f64>>,
    radius_m: f64,
    bike_decay_m: f64,
}

impl<'a> Surroundings<'a> {
    pub(crate) fn new(layers: &'a Layers, config: &ScoringConfig) -> Self {
        let parks = layers.parks.iter()
            .filter_map(|park| park.centroid(config.centroid))
            .collect();

        let amenities = layers.amenities.iter()
            .filter_map(|amenity| Some((amenity.point()?, is_grocery(amenity, &config.grocery_tags))))
            .collect();

        let bike_lanes = layers.bike_network.iter()
            .filter_map(|lane| lane.geometry.as_ref())
            .collect();

        Self {
            parks,
            amenities,
            bike_lanes,
            radius_m: config.amenity_radius_m,
            bike_decay_m: config.bike_decay_m,
        }
    }

    /// Measure one candidate against every amenity layer.
    pub(crate) fn measure(&self, candidate: &Candidate) -> RawMetrics {
        let here = candidate.centroid;
        let within = |p: Point<f64>| haversine_distance(here, p) <= self.radius_m;

        let parks_count = self.parks.iter().filter(|&&p| within(p)).count();

        let (mut supermarket_count, mut restaurant_count) = (0, 0);
        for &(p, grocery) in &self.amenities {
            if !within(p) { continue }
            if grocery { supermarket_count += 1 } else { restaurant_count += 1 }
        }

        let bike_distance = self.bike_lanes.iter()
            .filter_map(|lane| point_to_linear_distance(here, lane))
            .fold(f64::INFINITY, f64::min);

        RawMetrics {
            campus_distance: candidate.campus_distance,
            parks_count,
            grocery_count: supermarket_count + restaurant_count,
            supermarket_count,
            restaurant_count,
            bike_distance,
            bike_access: bike_access(bike_distance, self.bike_decay_m),
            transit_distance: candidate.transit_distance,
        }
    }
}

/// Linear decay of bike access from 1 at the lane to 0 at `decay_m`.
pub fn bike_access(distance_m: f64, decay_m: f64) -> f64 {
    (1.0 - distance_m / decay_m).max(0.0)
}

/// Whether an amenity's `amenity`/`shop` tag is one of the grocery tags.
pub fn is_grocery(feature: &Feature, tags: &[String]) -> bool {
    feature.first_prop_str(&AMENITY_TYPE_KEYS)
        .is_some_and(|ty| tags.iter().any(|tag| tag == ty))
}
