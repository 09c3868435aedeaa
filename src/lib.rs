use std::io::BufRead;

use crate::config::SimulationConfig;
use crate::domain::simulation::{ReportSink, Simulation};
use crate::error::Result;
use crate::loader::network_input::parse_network_input;

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod output;

/// Parses a network description and replays it, sending every report to `sink`.
///
/// Returns the simulation in its final state so callers can inspect the resulting topology.
pub fn run_simulation<R: BufRead>(input: R, config: &SimulationConfig, sink: &mut dyn ReportSink) -> Result<Simulation> {
    let network = parse_network_input(input)?;
    log::info!("Network input parsed. Starting replay.");

    let mut simulation = Simulation::new(config.display);
    simulation.seed(network.initial_routers);
    simulation.replay(&network.events, sink)?;

    Ok(simulation)
}
