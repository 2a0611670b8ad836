use anyhow::Result;
use clap::Parser;

use campus_scout::cli::{Cli, Commands};
use campus_scout::commands::{campuses, rank};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match &cli.command {
        Commands::Campuses(args) => campuses::run(&cli, args),
        Commands::Rank(args) => rank::run(&cli, args),
    }
}
