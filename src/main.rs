//! Command line tool: resolves one fix from one scan
use log::{error, info};

use bts_locate::prelude::*;

mod cli;
use cli::Cli;

/// Missing or invalid command line parameters
const EXIT_BAD_PARAMETERS: i32 = 1;

/// Less than three matched stations: no fix can be resolved
const EXIT_INSUFFICIENT_DATA: i32 = 3;

/// Input file missing or unreadable
const EXIT_INPUT_UNAVAILABLE: i32 = 11;

fn main() {
    env_logger::init();

    let cli = Cli::new().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(EXIT_BAD_PARAMETERS);
    });

    let cfg = Config {
        signed_hemispheres: cli.signed_hemispheres(),
        ..Config::gsm900()
    };

    let observations = load_observations(cli.observations_path()).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(EXIT_INPUT_UNAVAILABLE);
    });

    let catalog = load_catalog(cli.catalog_path()).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(EXIT_INPUT_UNAVAILABLE);
    });

    info!(
        "{} observation(s), {} catalog record(s)",
        observations.len(),
        catalog.len()
    );

    let matched = match_stations(&observations, &catalog, &cfg);
    info!("{} matched station(s)", matched.len());

    let fix = estimate_fix(&matched);
    if !fix.is_resolved() {
        error!("{} matched station(s): cannot resolve a fix", matched.len());
        std::process::exit(EXIT_INSUFFICIENT_DATA);
    }

    let link = fix.maps_url();
    std::fs::write(cli.output_path(), &link).unwrap_or_else(|e| {
        error!("failed to write \"{}\": {}", cli.output_path(), e);
        std::process::exit(EXIT_INPUT_UNAVAILABLE);
    });

    println!("{}", link);
}
