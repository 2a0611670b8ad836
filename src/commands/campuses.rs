use anyhow::Result;

use crate::cli::{CampusesArgs, Cli};
use super::open_explorer;

pub fn run(cli: &Cli, args: &CampusesArgs) -> Result<()> {
    let explorer = open_explorer(cli, &args.data_dir)?;

    for campus in explorer.campuses().campuses() {
        let centroid = campus.centroid();
        println!("{}\t{}\t{:.6},{:.6}", campus.name(), campus.buildings().len(), centroid.x(), centroid.y());
    }
    Ok(())
}
