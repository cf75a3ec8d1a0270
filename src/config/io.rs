use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::types::InspectionsToml;
use crate::error::{InspectError, Result};

pub const CONFIG_FILE: &str = "inspections.toml";

/// Reads, parses and validates a config file. A missing file is a
/// configuration error, not a fallback to defaults.
///
/// # Errors
/// Returns error if the file is unreadable, malformed or fails validation.
pub fn load(path: &Path) -> Result<InspectionsToml> {
    let content = fs::read_to_string(path).map_err(|e| InspectError::Config {
        path: path.to_path_buf(),
        reason: format!("cannot read file: {e}"),
    })?;
    parse(path, &content)
}

/// # Errors
/// Returns error if the TOML is malformed or fails validation.
pub fn parse(path: &Path, content: &str) -> Result<InspectionsToml> {
    let config: InspectionsToml = toml::from_str(content).map_err(|e| InspectError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate(path, &config)?;
    Ok(config)
}

/// An id may be listed at most once across the three lists and must not be
/// blank.
///
/// # Errors
/// Returns the first offending id.
pub fn validate(path: &Path, config: &InspectionsToml) -> Result<()> {
    let lists = &config.inspections;
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let groups = [
        ("errors", &lists.errors),
        ("warnings", &lists.warnings),
        ("infos", &lists.infos),
    ];
    for (group, ids) in groups {
        for id in ids {
            if id.trim().is_empty() {
                return Err(InspectError::Config {
                    path: path.to_path_buf(),
                    reason: format!("blank inspection id in `{group}`"),
                });
            }
            if let Some(previous) = seen.insert(id.as_str(), group) {
                return Err(InspectError::Config {
                    path: path.to_path_buf(),
                    reason: format!("inspection `{id}` listed in both `{previous}` and `{group}`"),
                });
            }
        }
    }
    Ok(())
}

/// Writes the default config to `path`.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_default(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&InspectionsToml::default()).map_err(|e| {
        InspectError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;
    fs::write(path, content).map_err(|e| InspectError::io(e, path))
}
