//! Geometric kernel over (lon, lat) coordinates: great-circle distance, centroids,
//! point-in-ring and point-to-line distances.
mod centroid;
mod distance;
mod ring;
mod segment;

pub use centroid::{centroid, CentroidMethod};
pub use distance::{haversine_distance, nearest_distance, EARTH_RADIUS_M};
pub use ring::{point_in_ring, signed_area, vertex_mean};
pub use segment::{point_to_linear_distance, point_to_polyline_distance, point_to_segment_distance};
