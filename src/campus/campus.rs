use geo::Point;

use crate::layers::Feature;

/// A named campus and the building features it was assembled from.
#[derive(Debug, Clone, PartialEq)]
pub struct Campus {
    name: String,
    buildings: Vec<Feature>,
    centroid: Point<f64>,
}

impl Campus {
    pub(crate) fn new(name: String, buildings: Vec<Feature>, centroid: Point<f64>) -> Self {
        Self { name, buildings, centroid }
    }

    /// Cleaned (trimmed) campus name.
    #[inline] pub fn name(&self) -> &str { &self.name }

    /// Member features, in input order.
    #[inline] pub fn buildings(&self) -> &[Feature] { &self.buildings }

    /// Mean of the member centroids that could be computed.
    #[inline] pub fn centroid(&self) -> Point<f64> { self.centroid }
}
