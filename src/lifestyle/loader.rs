//! JSON scenario file loading
//!
//! A scenario file is a `LifestyleInputs` record in JSON; omitted fields
//! take the intake form's defaults.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::data::LifestyleInputs;

/// Error raised while loading a scenario file
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a lifestyle scenario from a JSON file
pub fn load_scenario(path: &Path) -> Result<LifestyleInputs, ScenarioError> {
    let contents = fs::read_to_string(path)?;
    let inputs: LifestyleInputs = serde_json::from_str(&contents)?;

    log::debug!(
        "loaded scenario from {}: age {}, {} children",
        path.display(),
        inputs.user_age,
        inputs.children.len(),
    );

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_sparse_scenario() {
        let dir = std::env::temp_dir();
        let path = dir.join("lifestyle_scenario_sparse.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"user_age": 55, "sailboat": true}}"#).unwrap();

        let inputs = load_scenario(&path).unwrap();
        assert_eq!(inputs.user_age, 55);
        assert!(inputs.sailboat);
        assert_eq!(inputs.sailboat_length, 35);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_malformed_scenario_is_an_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("lifestyle_scenario_bad.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(load_scenario(&path), Err(ScenarioError::Json(_))));

        fs::remove_file(&path).ok();
    }
}
