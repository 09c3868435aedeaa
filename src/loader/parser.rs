use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are automatically converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::JsonError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let data = fs::read_to_string(file_path).map_err(Error::IoError)?;

    let parsed_data: T = serde_json::from_str(&data).map_err(Error::JsonError)?;

    Ok(parsed_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config_dto::SimulationConfigDto;

    #[test]
    fn test_malformed_json_is_reported_as_json_error() {
        let path = std::env::temp_dir().join(format!("link_state_sim_malformed_{}.json", std::process::id()));
        fs::write(&path, "{ \"outputFormat\": ").unwrap();

        let result = parse_json_file::<SimulationConfigDto>(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::JsonError(_))), "got {:?}", result);
    }

    #[test]
    fn test_missing_file_is_reported_as_io_error() {
        let result = parse_json_file::<SimulationConfigDto>("does/not/exist.json");

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
