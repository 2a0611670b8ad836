use geo::{Geometry, Point};
use serde_json::{Map, Value};

use crate::geom::{centroid, CentroidMethod};

/// A single GeoJSON feature: an optional geometry plus its raw properties.
///
/// `geometry` is `None` when the source geometry was missing, of an unsupported
/// type, or carried out-of-range coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    pub geometry: Option<Geometry<f64>>,
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self { geometry: Some(geometry), properties: Map::new() }
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Get a string property, treating empty strings as absent.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// First non-empty string among `keys`.
    pub fn first_prop_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.prop_str(key))
    }

    /// Get the point coordinate, if this is a Point feature.
    #[inline]
    pub fn point(&self) -> Option<Point<f64>> {
        match &self.geometry {
            Some(Geometry::Point(point)) => Some(*point),
            _ => None,
        }
    }

    /// Representative point, if the geometry has one.
    #[inline]
    pub fn centroid(&self, method: CentroidMethod) -> Option<Point<f64>> {
        self.geometry.as_ref().and_then(|geometry| centroid(geometry, method))
    }
}
