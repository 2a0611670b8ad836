//! Two-pass scoring of a candidate set.
//!
//! Pass 1 measures raw metrics for each candidate against the amenity layers.
//! Pass 2 normalizes them against the candidate-set maxima and takes the weighted
//! sum. Because the candidate set is the normalization universe, a neighborhood's
//! score depends on which other neighborhoods passed the filter.

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::filter::Candidate;
use crate::layers::Layers;
use super::metrics::{RawMetrics, Surroundings};
use super::normalize::{Maxima, NormalizedMetrics};
use super::weights::WeightVector;

/// Raw and normalized metrics of one candidate plus its final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSet {
    pub raw: RawMetrics,
    pub normalized: NormalizedMetrics,
    pub final_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredNeighborhood {
    pub candidate: Candidate,
    pub metrics: MetricSet,
}

impl ScoredNeighborhood {
    #[inline] pub fn name(&self) -> &str { &self.candidate.name }
    #[inline] pub fn score(&self) -> f64 { self.metrics.final_score }
}

/// Scored candidates, best first; equal scores keep input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<ScoredNeighborhood>,
    maxima: Maxima,
    include_transit: bool,
}

impl Ranking {
    #[inline] pub fn len(&self) -> usize { self.entries.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    #[inline] pub fn entries(&self) -> &[ScoredNeighborhood] { &self.entries }
    #[inline] pub fn iter(&self) -> impl Iterator<Item = &ScoredNeighborhood> { self.entries.iter() }

    /// Maxima the candidates were normalized against.
    #[inline] pub fn maxima(&self) -> &Maxima { &self.maxima }

    /// Whether final scores include the transit term.
    #[inline] pub fn includes_transit(&self) -> bool { self.include_transit }

    /// Entry by neighborhood display name.
    pub fn find(&self, name: &str) -> Option<&ScoredNeighborhood> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Light path: recompute only the weighted sums for new weights.
    /// Raw metrics, maxima and normalized values are reused as-is.
    pub fn reweight(&self, weights: &WeightVector) -> Ranking {
        let mut entries = self.entries.clone();
        for entry in &mut entries {
            entry.metrics.final_score = entry.metrics.normalized.weighted_score(weights, self.include_transit);
        }
        sort_ranking(&mut entries);
        Ranking { entries, maxima: self.maxima, include_transit: self.include_transit }
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a ScoredNeighborhood;
    type IntoIter = std::slice::Iter<'a, ScoredNeighborhood>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

/// Full path: measure every candidate (pass 1), then normalize, weight and rank (pass 2).
pub fn score_candidates(
    candidates: Vec<Candidate>,
    layers: &Layers,
    weights: &WeightVector,
    config: &ScoringConfig,
) -> Ranking {
    let surroundings = Surroundings::new(layers, config);
    let measured: Vec<(Candidate, RawMetrics)> = candidates.into_iter()
        .map(|candidate| {
            let raw = surroundings.measure(&candidate);
            (candidate, raw)
        })
        .collect();

    let ranking = rank(measured, weights, config.include_transit);
    log::debug!("scored {} candidates with {}", ranking.len(), weights);
    ranking
}

/// Pass 2 over already measured candidates.
pub fn rank(measured: Vec<(Candidate, RawMetrics)>, weights: &WeightVector, include_transit: bool) -> Ranking {
    let maxima = Maxima::over(measured.iter().map(|(_, raw)| raw));

    let mut entries: Vec<ScoredNeighborhood> = measured.into_iter()
        .map(|(candidate, raw)| {
            let normalized = NormalizedMetrics::new(&raw, &maxima);
            let final_score = normalized.weighted_score(weights, include_transit);
            ScoredNeighborhood { candidate, metrics: MetricSet { raw, normalized, final_score } }
        })
        .collect();

    sort_ranking(&mut entries);
    Ranking { entries, maxima, include_transit }
}

/// Descending by score; ties fall back to the candidates' input order.
fn sort_ranking(entries: &mut [ScoredNeighborhood]) {
    entries.sort_by(|a, b| {
        b.score().total_cmp(&a.score())
            .then_with(|| a.candidate.index.cmp(&b.candidate.index))
    });
}
