use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// Walking speed assumption, about 3 mph.
pub const WALK_SPEED_M_PER_MIN: f64 = 80.0;

/// Biking speed assumption, about 9.5 mph.
pub const BIKE_SPEED_M_PER_MIN: f64 = 250.0;

/// Calibrated time budgets in minutes with their (walk, bike) distances in meters.
const THRESHOLDS: [(u32, f64, f64); 4] = [
    (5, 400.0, 1250.0),
    (10, 800.0, 2500.0),
    (15, 1200.0, 3750.0),
    (30, 2400.0, 7500.0),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Walk,
    Bike,
}

impl TravelMode {
    pub fn to_str(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Bike => "bike",
        }
    }

    /// Assumed travel speed in meters per minute.
    pub fn speed(&self) -> f64 {
        match self {
            TravelMode::Walk => WALK_SPEED_M_PER_MIN,
            TravelMode::Bike => BIKE_SPEED_M_PER_MIN,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for TravelMode {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk" => Ok(TravelMode::Walk),
            "bike" => Ok(TravelMode::Bike),
            _ => Err(ScoutError::UnknownTravelMode(s.to_string())),
        }
    }
}

/// The time budgets that have a calibrated distance.
pub fn supported_minutes() -> impl Iterator<Item = u32> {
    THRESHOLDS.iter().map(|&(minutes, _, _)| minutes)
}

/// Maximum travel distance in meters for a time budget and travel mode.
/// Budgets outside the table are rejected; there is no interpolation.
pub fn max_distance(minutes: u32, mode: TravelMode) -> Result<f64> {
    THRESHOLDS.iter()
        .find(|&&(m, _, _)| m == minutes)
        .map(|&(_, walk, bike)| match mode {
            TravelMode::Walk => walk,
            TravelMode::Bike => bike,
        })
        .ok_or(ScoutError::InvalidThreshold { minutes, mode })
}
