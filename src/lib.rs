#![doc = "Campus Scout public API"]
mod campus;
mod config;
mod error;
mod explorer;
mod filter;
mod geom;
mod layers;
mod score;
mod threshold;

pub mod cli;
pub mod commands;
pub mod io;

#[doc(inline)]
pub use campus::{fallback_campus_features, Campus, CampusRegistry};

#[doc(inline)]
pub use config::{DataFiles, ScoringConfig, ScoutConfig};

#[doc(inline)]
pub use error::{Result, ScoutError};

#[doc(inline)]
pub use explorer::{Evaluation, Explorer, Selection};

#[doc(inline)]
pub use filter::{filter_neighborhoods, nearest_transit_distance, neighborhood_name, Candidate};

#[doc(inline)]
pub use geom::{
    centroid, haversine_distance, nearest_distance, point_in_ring, point_to_linear_distance,
    point_to_polyline_distance, point_to_segment_distance, signed_area, vertex_mean, CentroidMethod,
    EARTH_RADIUS_M,
};

#[doc(inline)]
pub use layers::{Feature, LayerKind, Layers, TransitMode};

#[doc(inline)]
pub use score::{
    bike_access, is_grocery, rank, score_candidates, Criterion, Maxima, MetricSet, NormalizedMetrics,
    Ranking, RawMetrics, ScoredNeighborhood, WeightVector,
};

#[doc(inline)]
pub use threshold::{max_distance, supported_minutes, TravelMode, BIKE_SPEED_M_PER_MIN, WALK_SPEED_M_PER_MIN};
