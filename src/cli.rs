use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::layers::TransitMode;
use crate::score::WeightVector;
use crate::threshold::{supported_minutes, TravelMode};

/// Campus neighborhood scout
#[derive(Parser, Debug)]
#[command(name = "campus-scout", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON configuration file (scoring parameters and data file names)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the campuses found in the universities layer
    Campuses(CampusesArgs),

    /// Rank neighborhoods around a campus
    Rank(RankArgs),
}

#[derive(Args, Debug)]
pub struct CampusesArgs {
    /// Directory holding the GeoJSON layers
    #[arg(value_hint = ValueHint::DirPath)]
    pub data_dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Directory holding the GeoJSON layers
    #[arg(value_hint = ValueHint::DirPath)]
    pub data_dir: PathBuf,

    /// Campus name, as listed by `campuses`
    #[arg(short, long)]
    pub campus: String,

    /// Travel mode: walk or bike
    #[arg(short, long, default_value = "walk")]
    pub mode: TravelMode,

    /// Time budget in minutes: 5, 10, 15 or 30
    #[arg(long, default_value_t = 15, value_parser = parse_minutes)]
    pub minutes: u32,

    /// Transit modality: bus, subway or bikeshare
    #[arg(short, long, default_value = "bus")]
    pub transit: TransitMode,

    /// Weights as distance,parks,grocery,bikeAccess[,transit]
    #[arg(short, long)]
    pub weights: Option<WeightVector>,

    /// Print the ranking as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Also write the ranked neighborhoods as GeoJSON
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub geojson: Option<PathBuf>,
}

/// Accept only the time budgets that have a calibrated distance.
fn parse_minutes(s: &str) -> Result<u32, String> {
    let minutes: u32 = s.parse().map_err(|e| format!("{e}"))?;
    if supported_minutes().any(|m| m == minutes) { return Ok(minutes) }

    let supported: Vec<String> = supported_minutes().map(|m| m.to_string()).collect();
    Err(format!("expected one of {}", supported.join(", ")))
}
