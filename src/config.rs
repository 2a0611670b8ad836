use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geom::CentroidMethod;
use crate::layers::LayerKind;

/// Tunables of the scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Catchment radius for counting parks and grocery/restaurant points, in meters.
    pub amenity_radius_m: f64,
    /// Bike-lane distance at which bike access decays to zero, in meters.
    pub bike_decay_m: f64,
    /// `amenity`/`shop` tag values counted as grocery rather than restaurant.
    pub grocery_tags: Vec<String>,
    /// Fold the transit term into final scores.
    pub include_transit: bool,
    pub centroid: CentroidMethod,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            amenity_radius_m: 500.0,
            bike_decay_m: 1000.0,
            grocery_tags: vec!["supermarket".into(), "grocery".into()],
            include_transit: false,
            centroid: CentroidMethod::VertexMean,
        }
    }
}

/// File names of each layer inside a data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub neighborhoods: String,
    pub universities: String,
    pub parks: String,
    pub amenities: String,
    pub bike_network: String,
    pub bus_stops: String,
    pub subway_stops: String,
    pub bike_share: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            neighborhoods: "Philly Neighborhood.geojson".into(),
            universities: "Universities_Colleges.geojson".into(),
            parks: "Parks and Recreation.geojson".into(),
            amenities: "Grocery&Restaurant.geojson".into(),
            bike_network: "Bike_Network.geojson".into(),
            bus_stops: "SEPTA_Bus_Stops.geojson".into(),
            subway_stops: "SEPTA_Subway_Stations.geojson".into(),
            bike_share: "Indego_Stations.geojson".into(),
        }
    }
}

impl DataFiles {
    pub fn get(&self, kind: LayerKind) -> &str {
        match kind {
            LayerKind::Neighborhoods => &self.neighborhoods,
            LayerKind::Universities => &self.universities,
            LayerKind::Parks => &self.parks,
            LayerKind::Amenities => &self.amenities,
            LayerKind::BikeNetwork => &self.bike_network,
            LayerKind::BusStops => &self.bus_stops,
            LayerKind::SubwayStops => &self.subway_stops,
            LayerKind::BikeShare => &self.bike_share,
        }
    }
}

/// Top-level configuration, read from an optional JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub scoring: ScoringConfig,
    pub data: DataFiles,
}

impl ScoutConfig {
    /// Reads a configuration from a JSON file at `path`. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Read `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }
}
