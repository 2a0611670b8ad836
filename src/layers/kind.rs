use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ScoutError;

/// The input feature collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Neighborhoods,  // Polygons to be scored
    Universities,   // Campus buildings and parcels
    Parks,          // Park polygons or points
    Amenities,      // Grocery stores and restaurants (points)
    BikeNetwork,    // Bike lanes (lines)
    BusStops,
    SubwayStops,
    BikeShare,
}

impl LayerKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            LayerKind::Neighborhoods => "neighborhoods",
            LayerKind::Universities => "universities",
            LayerKind::Parks => "parks",
            LayerKind::Amenities => "amenities",
            LayerKind::BikeNetwork => "bike_network",
            LayerKind::BusStops => "bus_stops",
            LayerKind::SubwayStops => "subway_stops",
            LayerKind::BikeShare => "bike_share",
        }
    }

    pub fn order() -> [LayerKind; 8] {
        [
            LayerKind::Neighborhoods,
            LayerKind::Universities,
            LayerKind::Parks,
            LayerKind::Amenities,
            LayerKind::BikeNetwork,
            LayerKind::BusStops,
            LayerKind::SubwayStops,
            LayerKind::BikeShare,
        ]
    }

    /// Whether a failed load of this layer aborts the whole data set.
    /// Transit layers degrade to an empty collection.
    pub fn is_required(&self) -> bool {
        !matches!(self, LayerKind::BusStops | LayerKind::SubwayStops | LayerKind::BikeShare)
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// The transit modality whose stops gate the neighborhood filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitMode {
    #[default]
    Bus,
    Subway,
    Bikeshare,
}

impl TransitMode {
    pub fn to_str(&self) -> &'static str {
        match self {
            TransitMode::Bus => "bus",
            TransitMode::Subway => "subway",
            TransitMode::Bikeshare => "bikeshare",
        }
    }

    /// Layer holding this modality's stops.
    pub fn layer(&self) -> LayerKind {
        match self {
            TransitMode::Bus => LayerKind::BusStops,
            TransitMode::Subway => LayerKind::SubwayStops,
            TransitMode::Bikeshare => LayerKind::BikeShare,
        }
    }
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for TransitMode {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bus" => Ok(TransitMode::Bus),
            "subway" => Ok(TransitMode::Subway),
            "bikeshare" => Ok(TransitMode::Bikeshare),
            _ => Err(ScoutError::UnknownTransitMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transit_round_trip_names() {
        for mode in [TransitMode::Bus, TransitMode::Subway, TransitMode::Bikeshare] {
            assert_eq!(mode.to_str().parse::<TransitMode>(), Ok(mode));
        }
        assert_eq!(" Subway ".parse::<TransitMode>(), Ok(TransitMode::Subway));
        assert_eq!("tram".parse::<TransitMode>(), Err(ScoutError::UnknownTransitMode("tram".into())));
    }

    #[test]
    fn transit_layers_are_optional() {
        for mode in [TransitMode::Bus, TransitMode::Subway, TransitMode::Bikeshare] {
            assert!(!mode.layer().is_required());
        }
        assert!(LayerKind::Neighborhoods.is_required());
        assert!(LayerKind::BikeNetwork.is_required());
        assert!(LayerKind::Universities.is_required());
    }
}
