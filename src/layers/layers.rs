use super::{feature::Feature, kind::{LayerKind, TransitMode}};

/// All input feature collections, fully materialized in memory.
#[derive(Debug, Clone, Default)]
pub struct Layers {
    pub neighborhoods: Vec<Feature>,
    pub universities: Vec<Feature>,
    pub parks: Vec<Feature>,
    pub amenities: Vec<Feature>,
    pub bike_network: Vec<Feature>,
    pub bus_stops: Vec<Feature>,
    pub subway_stops: Vec<Feature>,
    pub bike_share: Vec<Feature>,
}

impl Layers {
    pub fn get_layer(&self, kind: LayerKind) -> &[Feature] {
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

    pub fn get_layer_mut(&mut self, kind: LayerKind) -> &mut Vec<Feature> {
        match kind {
            LayerKind::Neighborhoods => &mut self.neighborhoods,
            LayerKind::Universities => &mut self.universities,
            LayerKind::Parks => &mut self.parks,
            LayerKind::Amenities => &mut self.amenities,
            LayerKind::BikeNetwork => &mut self.bike_network,
            LayerKind::BusStops => &mut self.bus_stops,
            LayerKind::SubwayStops => &mut self.subway_stops,
            LayerKind::BikeShare => &mut self.bike_share,
        }
    }

    /// Stops of the given transit modality.
    #[inline]
    pub fn transit_stops(&self, mode: TransitMode) -> &[Feature] { self.get_layer(mode.layer()) }
}
