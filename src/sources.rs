//! Loads the YAML list of research source URLs.

use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourcesError {
    #[error("failed to read sources file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid yaml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("sources file must contain a list of URLs")]
    NotAList,
}

/// Read a YAML file whose document is a sequence of URLs.
///
/// Non-string scalars are stringified rather than rejected; anything that
/// is not a sequence is a hard error so the pipeline never starts with
/// malformed input.
pub fn load(path: &Path) -> Result<Vec<String>, SourcesError> {
    let raw = std::fs::read_to_string(path)?;
    parse(&raw)
}

fn parse(raw: &str) -> Result<Vec<String>, SourcesError> {
    let value: serde_yaml::Value = serde_yaml::from_str(raw)?;
    let sequence = value.as_sequence().ok_or(SourcesError::NotAList)?;

    Ok(sequence.iter().map(scalar_to_string).collect())
}

fn scalar_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other).unwrap_or_default().trim_end().to_string(),
    }
}
