use serde::Serialize;

use super::metrics::RawMetrics;
use super::weights::{Criterion, WeightVector};

/// Per-criterion maxima over the candidate set (the normalization universe).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Maxima {
    pub distance: f64,
    pub parks: f64,
    pub grocery: f64,
    pub bike_access: f64,
    pub transit: f64,
}

impl Maxima {
    /// Fold the maxima of a candidate set; all zero for an empty set.
    pub fn over<'a>(raws: impl IntoIterator<Item = &'a RawMetrics>) -> Self {
        raws.into_iter().fold(Self::default(), |m, raw| Self {
            distance: m.distance.max(raw.campus_distance),
            parks: m.parks.max(raw.parks_count as f64),
            grocery: m.grocery.max(raw.grocery_count as f64),
            bike_access: m.bike_access.max(raw.bike_access),
            transit: m.transit.max(raw.transit_distance),
        })
    }
}

/// Criterion values scaled to [0, 1], higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedMetrics {
    pub distance: f64,
    pub parks: f64,
    pub grocery: f64,
    pub bike_access: f64,
    pub transit: f64,
}

impl NormalizedMetrics {
    /// Scale raw metrics against the candidate-set maxima.
    ///
    /// A zero maximum means no variation: distances then normalize to 1 (everyone is
    /// equally close) while counts and bike access normalize to 0 (no credit).
    pub fn new(raw: &RawMetrics, max: &Maxima) -> Self {
        Self {
            distance: closeness(raw.campus_distance, max.distance),
            parks: share(raw.parks_count as f64, max.parks),
            grocery: share(raw.grocery_count as f64, max.grocery),
            bike_access: share(raw.bike_access, max.bike_access),
            transit: closeness(raw.transit_distance, max.transit),
        }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Distance => self.distance,
            Criterion::Parks => self.parks,
            Criterion::Grocery => self.grocery,
            Criterion::BikeAccess => self.bike_access,
            Criterion::Transit => self.transit,
        }
    }

    /// Weighted sum of the normalized values. The transit term is only added
    /// when `include_transit` is set.
    pub fn weighted_score(&self, weights: &WeightVector, include_transit: bool) -> f64 {
        Criterion::order().iter()
            .filter(|&&c| include_transit || c != Criterion::Transit)
            .map(|&c| self.get(c) * weights.get(c))
            .sum()
    }
}

#[inline]
fn closeness(value: f64, max: f64) -> f64 {
    if max > 0.0 { 1.0 - value / max } else { 1.0 }
}

#[inline]
fn share(value: f64, max: f64) -> f64 {
    if max > 0.0 { value / max } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(distance: f64, parks: usize, grocery: usize, bike_access: f64, transit: f64) -> RawMetrics {
        RawMetrics {
            campus_distance: distance,
            parks_count: parks,
            grocery_count: grocery,
            supermarket_count: grocery,
            restaurant_count: 0,
            bike_distance: (1.0 - bike_access) * 1000.0,
            bike_access,
            transit_distance: transit,
        }
    }

    #[test]
    fn maxima_of_empty_set() {
        assert_eq!(Maxima::over(std::iter::empty()), Maxima::default());
    }

    #[test]
    fn maxima_per_criterion() {
        let raws = [raw(500.0, 2, 1, 0.8, 100.0), raw(1000.0, 0, 3, 0.1, 50.0)];
        let max = Maxima::over(&raws);
        assert_eq!(max, Maxima { distance: 1000.0, parks: 2.0, grocery: 3.0, bike_access: 0.8, transit: 100.0 });
    }

    #[test]
    fn normalizes_against_maxima() {
        let raws = [raw(500.0, 2, 1, 0.8, 100.0), raw(1000.0, 0, 3, 0.1, 50.0)];
        let max = Maxima::over(&raws);

        let a = NormalizedMetrics::new(&raws[0], &max);
        assert_eq!(a.distance, 0.5);
        assert_eq!(a.parks, 1.0);
        assert_eq!(a.grocery, 1.0 / 3.0);
        assert_eq!(a.bike_access, 1.0);
        assert_eq!(a.transit, 0.0);

        let b = NormalizedMetrics::new(&raws[1], &max);
        assert_eq!(b.distance, 0.0);
        assert_eq!(b.parks, 0.0);
        assert_eq!(b.grocery, 1.0);
        assert_eq!(b.bike_access, 0.1 / 0.8);
        assert_eq!(b.transit, 0.5);
    }

    #[test]
    fn zero_maxima() {
        let r = raw(0.0, 0, 0, 0.0, 0.0);
        let n = NormalizedMetrics::new(&r, &Maxima::over([&r]));
        assert_eq!(n.distance, 1.0);
        assert_eq!(n.transit, 1.0);
        assert_eq!(n.parks, 0.0);
        assert_eq!(n.grocery, 0.0);
        assert_eq!(n.bike_access, 0.0);
    }

    #[test]
    fn transit_term_is_optional() {
        let n = NormalizedMetrics { distance: 1.0, parks: 1.0, grocery: 1.0, bike_access: 1.0, transit: 1.0 };
        let w = WeightVector::default();
        assert!((n.weighted_score(&w, false) - 0.85).abs() < 1e-12);
        assert!((n.weighted_score(&w, true) - 1.0).abs() < 1e-12);
    }
}
