use serde::Deserialize;

use crate::domain::simulation::EmptyLinkStateDisplay;

/// On-disk configuration. Every field is optional; missing fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SimulationConfigDto {
    pub empty_linkstate_display: Option<EmptyLinkStateDisplay>,
    pub output_format: Option<OutputFormat>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    /// Neighbour table, LSDB and routing table as `|`-separated text blocks.
    #[default]
    Text,
    /// One JSON object per displayed router.
    Json,
}
