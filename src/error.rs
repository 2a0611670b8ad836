use thiserror::Error;

use crate::threshold::TravelMode;

/// Errors raised by the scoring core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoutError {
    /// The time budget is not one of the calibrated values.
    #[error("no threshold for {minutes} min by {mode} (expected 5, 10, 15 or 30)")]
    InvalidThreshold { minutes: u32, mode: TravelMode },

    #[error("unknown travel mode '{0}' (expected walk or bike)")]
    UnknownTravelMode(String),

    #[error("unknown transit mode '{0}' (expected bus, subway or bikeshare)")]
    UnknownTransitMode(String),

    /// No campus in the registry carries this cleaned name.
    #[error("unknown campus '{0}'")]
    UnknownCampus(String),

    /// Weights must be finite and non-negative.
    #[error("invalid {criterion} weight {value}")]
    InvalidWeight { criterion: &'static str, value: f64 },

    /// A weight list is not four or five comma-separated numbers.
    #[error("invalid weight list '{0}' (expected d,p,g,b[,t])")]
    InvalidWeightList(String),

    #[error("invalid GeoJSON: {0}")]
    InvalidGeoJson(String),
}

pub type Result<T, E = ScoutError> = std::result::Result<T, E>;
