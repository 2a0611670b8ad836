use geo::Point;
use serde::{Deserialize, Serialize};

use crate::campus::CampusRegistry;
use crate::config::ScoringConfig;
use crate::error::{Result, ScoutError};
use crate::filter::filter_neighborhoods;
use crate::layers::{Layers, TransitMode};
use crate::score::{score_candidates, Ranking, WeightVector};
use crate::threshold::{max_distance, TravelMode};

/// Everything the user has chosen; passed explicitly into each evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub campus: Option<String>,
    pub travel_mode: TravelMode,
    pub minutes: u32,
    pub transit: TransitMode,
    pub weights: WeightVector,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            campus: None,
            travel_mode: TravelMode::Walk,
            minutes: 15,
            transit: TransitMode::Bus,
            weights: WeightVector::default(),
        }
    }
}

impl Selection {
    /// Default selection for the named campus.
    pub fn for_campus(name: &str) -> Self {
        Self { campus: Some(name.to_string()), ..Self::default() }
    }
}

/// Result of evaluating one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub selection: Selection,
    /// Campus centroid the distances were measured from; `None` if no campus was selected.
    pub campus_centroid: Option<Point<f64>>,
    pub threshold_m: f64,
    pub ranking: Ranking,
}

impl Evaluation {
    /// Whether no neighborhood passed the filter.
    #[inline] pub fn is_empty(&self) -> bool { self.ranking.is_empty() }
}

/// Loaded layers plus the campus registry derived from them.
#[derive(Debug, Clone)]
pub struct Explorer {
    layers: Layers,
    campuses: CampusRegistry,
    config: ScoringConfig,
}

impl Explorer {
    pub fn new(layers: Layers, config: ScoringConfig) -> Self {
        let campuses = CampusRegistry::build(&layers.universities, config.centroid);
        Self { layers, campuses, config }
    }

    #[inline] pub fn layers(&self) -> &Layers { &self.layers }
    #[inline] pub fn campuses(&self) -> &CampusRegistry { &self.campuses }
    #[inline] pub fn config(&self) -> &ScoringConfig { &self.config }

    /// Resolve the threshold, filter neighborhoods around the selected campus and score them.
    ///
    /// An invalid time budget, unknown campus or invalid weight fails before any
    /// geometry is touched. With no campus selected the ranking is empty.
    pub fn evaluate(&self, selection: &Selection) -> Result<Evaluation> {
        let threshold_m = max_distance(selection.minutes, selection.travel_mode)?;
        selection.weights.validate()?;

        let Some(name) = selection.campus.as_deref() else {
            return Ok(Evaluation {
                selection: selection.clone(),
                campus_centroid: None,
                threshold_m,
                ranking: Ranking::default(),
            });
        };

        let campus = self.campuses.find_by_name(name)
            .ok_or_else(|| ScoutError::UnknownCampus(name.to_string()))?;

        let candidates = filter_neighborhoods(
            campus.centroid(),
            &self.layers.neighborhoods,
            threshold_m,
            self.layers.transit_stops(selection.transit),
            self.config.centroid,
        );
        let ranking = score_candidates(candidates, &self.layers, &selection.weights, &self.config);

        log::info!(
            "{}: {} neighborhoods within {} min by {} ({:.0} m, {} stops)",
            campus.name(), ranking.len(), selection.minutes, selection.travel_mode, threshold_m, selection.transit,
        );

        Ok(Evaluation {
            selection: selection.clone(),
            campus_centroid: Some(campus.centroid()),
            threshold_m,
            ranking,
        })
    }

    /// Re-score an evaluation under new weights without re-filtering or re-measuring.
    pub fn reweight(&self, evaluation: &Evaluation, weights: &WeightVector) -> Result<Evaluation> {
        weights.validate()?;
        Ok(Evaluation {
            selection: Selection { weights: *weights, ..evaluation.selection.clone() },
            campus_centroid: evaluation.campus_centroid,
            threshold_m: evaluation.threshold_m,
            ranking: evaluation.ranking.reweight(weights),
        })
    }
}
