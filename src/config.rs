use std::path::{Path, PathBuf};

use crate::api::config_dto::{OutputFormat, SimulationConfigDto};
use crate::domain::simulation::{DisplayPolicy, EmptyLinkStateDisplay};
use crate::error::Result;
use crate::loader::parser::parse_json_file;

/// Effective settings of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationConfig {
    pub display: DisplayPolicy,
    pub output_format: OutputFormat,
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: Option<String>,
    /// Optional file that receives a copy of all log records.
    pub log_file: Option<PathBuf>,
}

impl From<SimulationConfigDto> for SimulationConfig {
    fn from(dto: SimulationConfigDto) -> Self {
        SimulationConfig {
            display: DisplayPolicy { empty_linkstate: dto.empty_linkstate_display.unwrap_or_default() },
            output_format: dto.output_format.unwrap_or_default(),
            log_level: dto.log_level,
            log_file: dto.log_file.map(PathBuf::from),
        }
    }
}

impl SimulationConfig {
    /// Loads a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let dto: SimulationConfigDto = parse_json_file(path)?;
        Ok(dto.into())
    }

    pub fn with_empty_linkstate_display(mut self, display: EmptyLinkStateDisplay) -> Self {
        self.display.empty_linkstate = display;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}
