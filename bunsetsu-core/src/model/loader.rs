//! Model resource parsers

use super::ScoringModel;
use crate::error::ModelLoadError;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

pub(super) fn parse_json(json: &str) -> Result<ScoringModel, ModelLoadError> {
    // Weights outside i32 or non-integers are rejected by serde
    let records: HashMap<String, i32> = serde_json::from_str(json)?;
    ScoringModel::from_records(records)
}

pub(super) fn parse_tsv(text: &str) -> Result<ScoringModel, ModelLoadError> {
    let mut records = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split('\t');
        let key = fields.next().unwrap_or_default().trim();
        let weight = fields
            .next()
            .map(str::trim)
            .ok_or_else(|| ModelLoadError::MalformedRecord {
                line: idx + 1,
                reason: format!("record '{key}' has no weight"),
            })?;
        if fields.next().is_some() {
            return Err(ModelLoadError::MalformedRecord {
                line: idx + 1,
                reason: "expected exactly two tab-separated fields".to_string(),
            });
        }

        let weight: i32 = weight
            .parse()
            .map_err(|e| ModelLoadError::MalformedRecord {
                line: idx + 1,
                reason: format!("weight '{weight}' is not an integer: {e}"),
            })?;
        records.push((key, weight));
    }

    ScoringModel::from_records(records)
}

pub(super) fn load_path(path: &Path) -> Result<ScoringModel, ModelLoadError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ModelLoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            ModelLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!(path = %path.display(), bytes = content.len(), "reading phrase model");

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json(&content)
    } else {
        parse_tsv(&content)
    }
}
