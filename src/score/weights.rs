//! User-adjustable weights for the scoring criteria.
//!
//! Each weight is an independent dial: editing one never rebalances the others,
//! and the vector is not required to sum to 1. As a consequence, final scores
//! computed under different weight vectors are not comparable with each other.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// One scoring criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Distance,
    Parks,
    Grocery,
    BikeAccess,
    Transit,
}

impl Criterion {
    pub fn to_str(&self) -> &'static str {
        match self {
            Criterion::Distance => "distance",
            Criterion::Parks => "parks",
            Criterion::Grocery => "grocery",
            Criterion::BikeAccess => "bikeAccess",
            Criterion::Transit => "transit",
        }
    }

    pub fn order() -> [Criterion; 5] {
        [
            Criterion::Distance,
            Criterion::Parks,
            Criterion::Grocery,
            Criterion::BikeAccess,
            Criterion::Transit,
        ]
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Five non-negative weights, one per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightVector {
    distance: f64,
    parks: f64,
    grocery: f64,
    bike_access: f64,
    transit: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self { distance: 0.3, parks: 0.2, grocery: 0.2, bike_access: 0.15, transit: 0.15 }
    }
}

impl WeightVector {
    /// Construct a weight vector, rejecting negative or non-finite weights.
    pub fn new(distance: f64, parks: f64, grocery: f64, bike_access: f64, transit: f64) -> Result<Self> {
        let weights = Self { distance, parks, grocery, bike_access, transit };
        weights.validate()?;
        Ok(weights)
    }

    /// Check every weight is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for criterion in Criterion::order() {
            let value = self.get(criterion);
            if !value.is_finite() || value < 0.0 {
                return Err(ScoutError::InvalidWeight { criterion: criterion.to_str(), value });
            }
        }
        Ok(())
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

    /// Copy with one weight replaced; the other four are left untouched.
    pub fn with(mut self, criterion: Criterion, value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(ScoutError::InvalidWeight { criterion: criterion.to_str(), value });
        }
        match criterion {
            Criterion::Distance => self.distance = value,
            Criterion::Parks => self.parks = value,
            Criterion::Grocery => self.grocery = value,
            Criterion::BikeAccess => self.bike_access = value,
            Criterion::Transit => self.transit = value,
        }
        Ok(self)
    }

    /// Sum of all five weights (informational; scores are never divided by it).
    pub fn total(&self) -> f64 {
        Criterion::order().iter().map(|&c| self.get(c)).sum()
    }
}

/// Parse `d,p,g,b[,t]`; a missing transit weight defaults to 0.
impl FromStr for WeightVector {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s.split(',')
            .map(|part| part.trim().parse::<f64>()
                .map_err(|_| ScoutError::InvalidWeightList(s.to_string())))
            .collect::<Result<Vec<f64>>>()?;

        match values.as_slice() {
            &[d, p, g, b] => Self::new(d, p, g, b, 0.0),
            &[d, p, g, b, t] => Self::new(d, p, g, b, t),
            _ => Err(ScoutError::InvalidWeightList(s.to_string())),
        }
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Criterion::order().iter()
            .map(|&c| format!("{}={}", c, self.get(c)))
            .collect();
        write!(f, "Weights({})", parts.join(", "))
    }
}
