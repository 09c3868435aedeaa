use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use link_state_sim::api::config_dto::OutputFormat;
use link_state_sim::config::SimulationConfig;
use link_state_sim::domain::simulation::{EmptyLinkStateDisplay, ReportSink};
use link_state_sim::error::Result;
use link_state_sim::output::{JsonLinesRenderer, TextRenderer};
use link_state_sim::{logger, run_simulation};

/// Replays a scripted link-state network and prints the neighbour table, LSDB and
/// routing table of every router named by an event.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Network description to replay. Reads stdin when omitted.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format, overrides the configuration file.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Display every known router when a LINKSTATE line lists no routers.
    #[arg(long)]
    display_all_on_empty_linkstate: bool,

    /// Also write log records to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            logger::init(None, None);
            log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logger::init(config.log_level.as_deref(), config.log_file.as_deref());
    log::info!("Logger initialized. Starting link-state simulation.");

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Simulation aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(format) = args.format {
        config = config.with_output_format(format);
    }
    if args.display_all_on_empty_linkstate {
        config = config.with_empty_linkstate_display(EmptyLinkStateDisplay::AllRouters);
    }
    if let Some(path) = &args.log_file {
        config.log_file = Some(path.clone());
    }

    Ok(config)
}

fn run(args: &Args, config: &SimulationConfig) -> Result<()> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    let mut sink: Box<dyn ReportSink> = match config.output_format {
        OutputFormat::Text => Box::new(TextRenderer::new(out)),
        OutputFormat::Json => Box::new(JsonLinesRenderer::new(out)),
    };

    match &args.input {
        Some(path) => {
            log::info!("Loading network from path: '{}'...", path.display());
            let file = File::open(path)?;
            run_simulation(BufReader::new(file), config, sink.as_mut())?;
        }
        None => {
            log::info!("Loading network from stdin...");
            run_simulation(io::stdin().lock(), config, sink.as_mut())?;
        }
    }

    Ok(())
}
