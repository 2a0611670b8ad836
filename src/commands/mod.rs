pub mod campuses;
pub mod rank;

use anyhow::Result;

use crate::cli::Cli;
use crate::config::ScoutConfig;
use crate::explorer::Explorer;
use crate::io::load_layers;

/// Load the configuration and every layer under `data_dir`.
pub(crate) fn open_explorer(cli: &Cli, data_dir: &std::path::Path) -> Result<Explorer> {
    let config = ScoutConfig::load(cli.config.as_deref())?;
    let layers = load_layers(data_dir, &config.data)?;
    Ok(Explorer::new(layers, config.scoring))
}
